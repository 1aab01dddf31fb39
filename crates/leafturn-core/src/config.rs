//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    direction::{DirectionCell, DirectionClassifier, RouteClassifier},
    error::{CoreError, Result},
    transition::TransitionConfig,
};

/// Environment variable overriding `site.base_path`.
///
/// Read at runtime by [`Config::load_with_env`] and at compile time by
/// [`NavigationSettings::from_build_env`].
pub const BASE_PATH_ENV: &str = "LEAFTURN_BASE_PATH";

/// Main configuration structure for Leafturn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Route categorization settings.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Page and layout transitions.
    #[serde(default)]
    pub transitions: TransitionsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Root path prefix the site is served under (e.g., "/" or "/app/").
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

/// Navigation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Path segment identifying the blog section.
    #[serde(default = "default_blog_segment")]
    pub blog_segment: String,
}

/// Transition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionsConfig {
    /// Transition applied when pages are swapped.
    #[serde(default = "TransitionConfig::page")]
    pub page: TransitionConfig,

    /// Transition applied when layouts are swapped.
    #[serde(default = "TransitionConfig::layout")]
    pub layout: TransitionConfig,
}

// Default value functions
fn default_base_path() -> String {
    "/".to_string()
}

fn default_blog_segment() -> String {
    "blog".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            blog_segment: default_blog_segment(),
        }
    }
}

impl Default for TransitionsConfig {
    fn default() -> Self {
        Self {
            page: TransitionConfig::page(),
            layout: TransitionConfig::layout(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment overrides.
    ///
    /// `LEAFTURN__SECTION__KEY` variables override any key, and
    /// `LEAFTURN_BASE_PATH` overrides `site.base_path` last, matching what
    /// the browser build bakes in.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("LEAFTURN").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        let config = config.with_base_path_override(std::env::var(BASE_PATH_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replace `site.base_path` when an override is given.
    pub fn with_base_path_override(mut self, base_path: Option<String>) -> Self {
        if let Some(base_path) = base_path {
            self.site.base_path = base_path;
        }
        self
    }

    /// Validate the configuration.
    ///
    /// Only fatal problems are reported here; see [`Config::warnings`] for
    /// the rest. Callers decide how to surface warnings.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        let segment = &self.navigation.blog_segment;
        if segment.is_empty() {
            return Err(CoreError::config("navigation.blog_segment cannot be empty"));
        }
        if segment.contains('/') {
            return Err(CoreError::config(format!(
                "navigation.blog_segment must be a single path segment, got {segment:?}"
            )));
        }

        Ok(())
    }

    /// Non-fatal configuration issues.
    pub fn warnings(&self) -> Vec<String> {
        self.navigation_settings().warnings()
    }

    /// Settings consumed by the navigation observer.
    pub fn navigation_settings(&self) -> NavigationSettings {
        NavigationSettings {
            base_path: self.site.base_path.clone(),
            blog_segment: self.navigation.blog_segment.clone(),
            page_transition: self.transitions.page.clone(),
            layout_transition: self.transitions.layout.clone(),
        }
    }
}

/// Everything the navigation observer needs, detached from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSettings {
    /// Root path prefix, compared verbatim against route paths.
    pub base_path: String,

    /// Blog section segment appended to `base_path`.
    pub blog_segment: String,

    /// Transition for routed page views.
    pub page_transition: TransitionConfig,

    /// Transition for the layout around them.
    pub layout_transition: TransitionConfig,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            blog_segment: default_blog_segment(),
            page_transition: TransitionConfig::page(),
            layout_transition: TransitionConfig::layout(),
        }
    }
}

impl NavigationSettings {
    /// Default settings with `LEAFTURN_BASE_PATH` from the build environment.
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            base_path: option_env!("LEAFTURN_BASE_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.base_path),
            ..defaults
        }
    }

    /// Settings from a configuration file embedded at build time.
    ///
    /// An empty document means no file was embedded and falls back to
    /// [`NavigationSettings::from_build_env`]. A document that fails to parse
    /// or validate is logged and falls back the same way. Warnings are logged
    /// through `tracing` once each.
    pub fn from_embedded(content: &str) -> Self {
        let settings = if content.trim().is_empty() {
            Self::from_build_env()
        } else {
            match Config::from_toml_str(content) {
                Ok(config) => config.navigation_settings(),
                Err(e) => {
                    tracing::error!("Embedded configuration rejected, using defaults: {e}");
                    Self::from_build_env()
                }
            }
        };

        for warning in settings.warnings() {
            tracing::warn!("{warning}");
        }

        settings
    }

    /// Non-fatal issues with these settings.
    ///
    /// A base path without a trailing slash still classifies, but the blog
    /// prefix is formed by plain concatenation, so `/app` + `blog` gives
    /// `/appblog` while the router serves `/app/blog`.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let base = &self.base_path;

        if !base.starts_with('/') {
            warnings.push(format!("site.base_path should start with '/', got {base:?}"));
        }
        if !base.ends_with('/') {
            warnings.push(format!(
                "site.base_path should end with '/'; blog routes will match {:?}",
                format!("{base}{}", self.blog_segment)
            ));
        }

        warnings
    }

    /// Path of the blog section as served by the router.
    ///
    /// Unlike [`RouteClassifier::blog_prefix`], this always puts exactly one
    /// separator between the base path and the segment.
    pub fn blog_path(&self, slug: Option<&str>) -> String {
        let section = format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            self.blog_segment
        );
        match slug {
            Some(slug) => format!("{section}/{slug}"),
            None => section,
        }
    }

    /// Route classifier for these settings.
    pub fn route_classifier(&self) -> RouteClassifier {
        RouteClassifier::new(self.base_path.clone(), &self.blog_segment)
    }

    /// Direction classifier writing into `cell`.
    pub fn direction_classifier(&self, cell: DirectionCell) -> DirectionClassifier {
        DirectionClassifier::new(self.route_classifier(), cell)
    }
}
