//! Navigation direction context for Leptos views.
//!
//! The classifier lives in an explicitly provided [`SiteNavigation`] context
//! rather than a global, so each mounted app owns its own direction cell.

use leafturn_core::{Direction, DirectionCell, DirectionClassifier, NavigationSettings};
use leptos::prelude::*;

/// Navigation state shared with every view under the app root.
#[derive(Debug, Clone)]
pub struct SiteNavigation {
    /// Classifier owning the shared direction cell.
    pub classifier: DirectionClassifier,

    /// Settings the classifier was built from.
    pub settings: NavigationSettings,
}

impl SiteNavigation {
    /// Build navigation state with a fresh direction cell.
    pub fn new(settings: NavigationSettings) -> Self {
        let classifier = settings.direction_classifier(DirectionCell::new());
        Self {
            classifier,
            settings,
        }
    }
}

/// Direction signal provided by [`crate::PageTransition`] to its descendants.
#[derive(Debug, Clone, Copy)]
pub struct NavigationDirection(pub Signal<Direction>);

/// Create navigation state and provide it as context.
pub fn provide_site_navigation(settings: NavigationSettings) -> SiteNavigation {
    let navigation = SiteNavigation::new(settings);
    provide_context(navigation.clone());
    navigation
}

/// Get the provided navigation state, or default state if none was provided.
pub fn use_site_navigation() -> SiteNavigation {
    use_context::<SiteNavigation>().unwrap_or_else(|| {
        tracing::warn!("SiteNavigation not provided, using default settings");
        SiteNavigation::new(NavigationSettings::default())
    })
}

/// Direction of the current page transition.
///
/// Reads `Forward` outside a [`crate::PageTransition`].
pub fn use_navigation_direction() -> Signal<Direction> {
    use_context::<NavigationDirection>()
        .map(|direction| direction.0)
        .unwrap_or_else(|| Signal::stored(Direction::Forward))
}

#[derive(Debug, Clone, PartialEq)]
struct Visit {
    path: String,
    query: String,
    direction: Direction,
}

/// Classify every route change.
///
/// A route change is any change of `pathname` or `query` (search string and
/// hash), so query-only navigations are reclassified too, as `Landing` →
/// `Landing` and so on. Only pathnames are compared. The previous pathname
/// is the `from` side of each event; the first evaluation sees an empty
/// `from`. Evaluation is lazy and synchronous, so whatever reads the
/// returned memo while rendering the destination view observes the
/// direction for that same route change.
pub fn track_navigation(
    classifier: DirectionClassifier,
    pathname: Signal<String>,
    query: Signal<String>,
) -> Memo<Direction> {
    let visit = Memo::new(move |previous: Option<&Visit>| {
        let to = pathname.get();
        let query = query.get();
        let from = previous.map(|visit| visit.path.as_str()).unwrap_or_default();
        let direction = classifier.on_navigate(from, &to);
        Visit {
            path: to,
            query,
            direction,
        }
    });

    Memo::new(move |_| visit.with(|visit| visit.direction))
}
