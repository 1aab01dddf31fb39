//! Leafturn Core Library
//!
//! Navigation direction classification, transition naming, configuration,
//! and error handling for the Leafturn site.

pub mod config;
pub mod direction;
pub mod error;
pub mod transition;

pub use config::{
    BASE_PATH_ENV, Config, NavigationConfig, NavigationSettings, SiteConfig, TransitionsConfig,
};
pub use direction::{
    Direction, DirectionCell, DirectionClassifier, NavigationEvent, NavigationHook, RouteCategory,
    RouteClassifier,
};
pub use error::{CoreError, Result};
pub use transition::{TransitionConfig, TransitionMode};
