//! Classify command - explain how a route change is classified

use std::path::Path;

use color_eyre::eyre::Result;
use leafturn_core::{Config, Direction, DirectionCell, NavigationSettings, RouteCategory};

/// Outcome of classifying one route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub from: RouteCategory,
    pub to: RouteCategory,
    pub direction: Direction,
}

/// Classify a single `(from, to)` pair with a fresh classifier.
pub fn explain(settings: &NavigationSettings, from: &str, to: &str) -> Explanation {
    let classifier = settings.direction_classifier(DirectionCell::new());
    let routes = classifier.routes();

    Explanation {
        from: routes.classify(from),
        to: routes.classify(to),
        direction: classifier.on_navigate(from, to),
    }
}

/// Run the classify command.
pub fn run(config_path: &Path, from: &str, to: &str) -> Result<()> {
    let config = Config::load_with_env(config_path)?;
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }
    let settings = config.navigation_settings();
    tracing::info!(
        base_path = %settings.base_path,
        blog_segment = %settings.blog_segment,
        "Loaded navigation settings"
    );

    let explanation = explain(&settings, from, to);
    let page = &settings.page_transition;

    println!("Base path:   {:?}", settings.base_path);
    println!("Blog prefix: {:?}", settings.route_classifier().blog_prefix());
    println!();
    println!("  from {from:?} → {}", explanation.from);
    println!("  to   {to:?} → {}", explanation.to);
    println!();
    println!(
        "Direction: {} (animation class: {}, mode: {})",
        explanation.direction,
        page.animation_class(explanation.direction),
        page.mode.as_str()
    );

    Ok(())
}
