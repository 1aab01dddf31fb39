//! Navigation direction classification.
//!
//! Every client-side route change is classified as [`Direction::Forward`] or
//! [`Direction::Back`] from the categories of its source and destination
//! paths. Only two edges carry meaning: landing → blog is forward and
//! blog → landing is back. Every other transition falls back to forward.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
};

use serde::{Deserialize, Serialize};

/// Direction of the current page transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// Descending into the site, or any transition without a clear direction.
    #[default]
    Forward = 0,
    /// Returning from the blog section to the landing page.
    Back = 1,
}

impl Direction {
    /// Lowercase name, as used in animation class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Back => "back",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Back,
            _ => Self::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic category of a route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteCategory {
    /// The site root, with or without its trailing separator.
    Landing,
    /// Anything under the blog section prefix.
    Blog,
    /// Everything else, including malformed paths.
    Other,
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landing => "landing",
            Self::Blog => "blog",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A `(from, to)` pair of paths for one route change.
///
/// `from` is empty on the initial page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent<'a> {
    /// Path being left.
    pub from: &'a str,

    /// Path being entered.
    pub to: &'a str,
}

impl<'a> NavigationEvent<'a> {
    /// Create a new navigation event.
    pub fn new(from: &'a str, to: &'a str) -> Self {
        Self { from, to }
    }
}

/// Classifies paths into [`RouteCategory`] values for one base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteClassifier {
    base_path: String,
    blog_prefix: String,
}

impl RouteClassifier {
    /// Create a classifier for the given base path and blog section segment.
    ///
    /// The blog prefix is the plain concatenation `base_path + blog_segment`,
    /// so a base path of `/` and segment `blog` yields `/blog`.
    pub fn new(base_path: impl Into<String>, blog_segment: &str) -> Self {
        let base_path = base_path.into();
        let blog_prefix = format!("{base_path}{blog_segment}");
        Self {
            base_path,
            blog_prefix,
        }
    }

    /// The configured base path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Paths starting with this prefix are in the blog section.
    pub fn blog_prefix(&self) -> &str {
        &self.blog_prefix
    }

    /// Classify a single path. Total over all strings.
    pub fn classify(&self, path: &str) -> RouteCategory {
        if self.is_landing(path) {
            RouteCategory::Landing
        } else if path.starts_with(&self.blog_prefix) {
            RouteCategory::Blog
        } else {
            RouteCategory::Other
        }
    }

    fn is_landing(&self, path: &str) -> bool {
        path == self.base_path || self.base_path.strip_suffix('/') == Some(path)
    }

    /// Direction implied by moving from one path to another.
    pub fn direction(&self, event: &NavigationEvent<'_>) -> Direction {
        match (self.classify(event.from), self.classify(event.to)) {
            (RouteCategory::Landing, RouteCategory::Blog) => Direction::Forward,
            (RouteCategory::Blog, RouteCategory::Landing) => Direction::Back,
            _ => Direction::Forward,
        }
    }
}

impl Default for RouteClassifier {
    fn default() -> Self {
        Self::new("/", "blog")
    }
}

/// Shared handle to the current [`Direction`].
///
/// Clones point at the same value. Writes are single atomic stores, so
/// readers on other threads never see a partially written value.
#[derive(Debug, Clone, Default)]
pub struct DirectionCell(Arc<AtomicU8>);

impl DirectionCell {
    /// Create a cell holding `Direction::Forward`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current direction.
    pub fn get(&self) -> Direction {
        Direction::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Overwrite the current direction.
    pub fn set(&self, direction: Direction) {
        self.0.store(direction as u8, Ordering::Release);
    }
}

/// Listener invoked by the router before each route change.
///
/// Hosts must call it synchronously, one event at a time, and let it
/// return before the destination view renders.
pub trait NavigationHook {
    fn before_navigate(&self, event: &NavigationEvent<'_>);
}

/// Owns the shared [`DirectionCell`] and rewrites it on every navigation.
#[derive(Debug, Clone)]
pub struct DirectionClassifier {
    routes: RouteClassifier,
    cell: DirectionCell,
}

impl DirectionClassifier {
    /// Create a classifier writing into the given cell.
    pub fn new(routes: RouteClassifier, cell: DirectionCell) -> Self {
        Self { routes, cell }
    }

    /// The route classifier in use.
    pub fn routes(&self) -> &RouteClassifier {
        &self.routes
    }

    /// A read handle to the shared direction, for renderers.
    pub fn cell(&self) -> DirectionCell {
        self.cell.clone()
    }

    /// Recompute the direction for a route change and store it.
    ///
    /// Returns the direction just written.
    pub fn on_navigate(&self, from: &str, to: &str) -> Direction {
        let direction = self.routes.direction(&NavigationEvent::new(from, to));
        tracing::debug!(from, to, %direction, "Classified navigation");
        self.cell.set(direction);
        direction
    }

    /// The most recently computed direction.
    pub fn current_direction(&self) -> Direction {
        self.cell.get()
    }
}

impl NavigationHook for DirectionClassifier {
    fn before_navigate(&self, event: &NavigationEvent<'_>) {
        self.on_navigate(event.from, event.to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(base: &str) -> DirectionClassifier {
        DirectionClassifier::new(RouteClassifier::new(base, "blog"), DirectionCell::new())
    }

    #[test]
    fn test_classify_root_base() {
        let routes = RouteClassifier::default();
        assert_eq!(routes.classify("/"), RouteCategory::Landing);
        assert_eq!(routes.classify(""), RouteCategory::Landing);
        assert_eq!(routes.classify("/blog"), RouteCategory::Blog);
        assert_eq!(routes.classify("/blog/my-post"), RouteCategory::Blog);
        assert_eq!(routes.classify("/blogroll"), RouteCategory::Blog);
        assert_eq!(routes.classify("/about"), RouteCategory::Other);
        assert_eq!(routes.classify("blog"), RouteCategory::Other);
    }

    #[test]
    fn test_classify_nested_base() {
        let routes = RouteClassifier::new("/app/", "blog");
        assert_eq!(routes.blog_prefix(), "/app/blog");
        assert_eq!(routes.classify("/app/"), RouteCategory::Landing);
        assert_eq!(routes.classify("/app"), RouteCategory::Landing);
        assert_eq!(routes.classify("/app/blog/x"), RouteCategory::Blog);
        assert_eq!(routes.classify("/"), RouteCategory::Other);
        assert_eq!(routes.classify("/blog"), RouteCategory::Other);
        assert_eq!(routes.classify("/app//"), RouteCategory::Other);
    }

    #[test]
    fn test_only_one_trailing_separator_is_stripped() {
        let routes = RouteClassifier::new("/app//", "blog");
        assert_eq!(routes.classify("/app/"), RouteCategory::Landing);
        assert_eq!(routes.classify("/app"), RouteCategory::Other);
    }

    #[test]
    fn test_direction_table() {
        let routes = RouteClassifier::default();
        let cases = [
            ("/", "/blog", Direction::Forward),
            ("/blog/a", "/", Direction::Back),
            ("/blog/a", "", Direction::Back),
            ("/blog/a", "/blog/b", Direction::Forward),
            ("/", "/", Direction::Forward),
            ("/", "/about", Direction::Forward),
            ("/about", "/", Direction::Forward),
            ("/about", "/blog", Direction::Forward),
            ("/blog", "/about", Direction::Forward),
        ];

        for (from, to, expected) in cases {
            assert_eq!(
                routes.direction(&NavigationEvent::new(from, to)),
                expected,
                "{from} -> {to}"
            );
        }
    }

    #[test]
    fn test_new_classifier_defaults_forward() {
        assert_eq!(classifier("/").current_direction(), Direction::Forward);
    }

    #[test]
    fn test_back_then_forward() {
        let classifier = classifier("/");
        assert_eq!(classifier.on_navigate("/blog/my-post", "/"), Direction::Back);
        assert_eq!(classifier.current_direction(), Direction::Back);

        classifier.on_navigate("/about", "/about/team");
        assert_eq!(classifier.current_direction(), Direction::Forward);
    }

    #[test]
    fn test_cell_is_shared_with_readers() {
        let cell = DirectionCell::new();
        let classifier = DirectionClassifier::new(RouteClassifier::default(), cell.clone());
        let reader = classifier.cell();

        classifier.on_navigate("/blog/x", "/");
        assert_eq!(cell.get(), Direction::Back);
        assert_eq!(reader.get(), Direction::Back);
    }

    #[test]
    fn test_navigation_hook() {
        let classifier = classifier("/");
        let hook: &dyn NavigationHook = &classifier;
        hook.before_navigate(&NavigationEvent::new("/blog", "/"));
        assert_eq!(classifier.current_direction(), Direction::Back);
    }

    #[test]
    fn test_direction_display_and_serde() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Back.to_string(), "back");
        assert_eq!(serde_json::to_string(&Direction::Back).unwrap(), "\"back\"");
        assert_eq!(RouteCategory::Landing.to_string(), "landing");
    }
}
