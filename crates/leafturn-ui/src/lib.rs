//! Leafturn UI Components
//!
//! Leptos glue between the router and the navigation direction classifier.
//!
//! # Components
//!
//! - [`PageTransition`] - Wrapper tagging routed views with `page-forward` / `page-back`
//!
//! # Context
//!
//! - [`provide_site_navigation`] - Create the classifier for an app root
//! - [`use_navigation_direction`] - Read the current direction from any view
//!
//! # Example
//!
//! ```ignore
//! use leafturn_core::NavigationSettings;
//! use leafturn_ui::{PageTransition, provide_site_navigation};
//! use leptos::prelude::*;
//! use leptos_router::components::Router;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     provide_site_navigation(NavigationSettings::from_build_env());
//!
//!     view! {
//!         <Router>
//!             <PageTransition>
//!                 // routes
//!             </PageTransition>
//!         </Router>
//!     }
//! }
//! ```

pub mod navigation;
pub mod transition;

pub use navigation::{
    NavigationDirection, SiteNavigation, provide_site_navigation, track_navigation,
    use_navigation_direction, use_site_navigation,
};
pub use transition::{PageTransition, page_class};
