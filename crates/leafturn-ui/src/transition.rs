//! Page wrapper that exposes the navigation direction to CSS.

use leafturn_core::{Direction, TransitionConfig};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::navigation::{NavigationDirection, track_navigation, use_site_navigation};

/// Class list for the page wrapper.
pub fn page_class(transition: &TransitionConfig, direction: Direction) -> String {
    format!("leafturn-page {}", transition.animation_class(direction))
}

/// Wraps routed views and tags them with the current transition direction.
///
/// Must be rendered inside a `Router`. Emits `page-forward` or `page-back`
/// (using the configured page transition name) along with `data-direction`
/// and `data-mode` attributes, so stylesheets can pick the enter animation
/// and its timing for newly mounted views.
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let navigation = use_site_navigation();
    let location = use_location();
    let search = location.search;
    let hash = location.hash;
    let query = Signal::derive(move || format!("{}{}", search.get(), hash.get()));
    let direction = track_navigation(
        navigation.classifier.clone(),
        location.pathname.into(),
        query,
    );
    provide_context(NavigationDirection(direction.into()));

    let transition = navigation.settings.page_transition.clone();
    let mode = transition.mode.as_str();

    view! {
      <div
        class=move || page_class(&transition, direction.get())
        data-direction=move || direction.get().as_str()
        data-mode=mode
      >
        {children()}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use leafturn_core::TransitionMode;

    use super::*;

    #[test]
    fn test_page_class() {
        let page = TransitionConfig::page();
        assert_eq!(page_class(&page, Direction::Forward), "leafturn-page page-forward");
        assert_eq!(page_class(&page, Direction::Back), "leafturn-page page-back");
    }

    #[test]
    fn test_page_class_custom_name() {
        let slide = TransitionConfig::new("slide").with_mode(TransitionMode::OutIn);
        assert_eq!(page_class(&slide, Direction::Back), "leafturn-page slide-back");
    }

    #[test]
    fn test_stylesheet_covers_every_mode() {
        let stylesheet = include_str!("../../../style/main.css");
        for mode in TransitionMode::ALL {
            let selector = format!("[data-mode=\"{}\"]", mode.as_str());
            assert!(stylesheet.contains(&selector), "missing {selector}");
        }
    }

    #[test]
    fn test_stylesheet_covers_default_page_classes() {
        let stylesheet = include_str!("../../../style/main.css");
        let page = TransitionConfig::page();
        for direction in [Direction::Forward, Direction::Back] {
            let class = format!(".{}", page.animation_class(direction));
            assert!(stylesheet.contains(&class), "missing {class}");
        }
    }
}
