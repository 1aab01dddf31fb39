//! Named page transitions.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// How the leaving and entering views overlap.
///
/// Routed views are swapped without an exit phase, so only the entering
/// animation is shaped by the mode: `out-in` holds it back for the length
/// of the would-be exit, while `default` and `in-out` start it at once.
/// Stylesheets select on the `data-mode` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionMode {
    /// Leave and enter run simultaneously.
    #[default]
    Default,
    /// The old view leaves before the new one enters.
    OutIn,
    /// The new view enters before the old one leaves.
    InOut,
}

impl TransitionMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::OutIn, Self::InOut];

    /// Value written to `data-mode`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::OutIn => "out-in",
            Self::InOut => "in-out",
        }
    }
}

/// A named transition applied when views are swapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Transition name, used as the animation class prefix.
    pub name: String,

    /// Overlap mode.
    #[serde(default)]
    pub mode: TransitionMode,
}

impl TransitionConfig {
    /// Create a transition with the default mode.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: TransitionMode::Default,
        }
    }

    /// Set the overlap mode.
    pub fn with_mode(mut self, mode: TransitionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Animation class for the given direction, e.g. `page-back`.
    pub fn animation_class(&self, direction: Direction) -> String {
        format!("{}-{}", self.name, direction.as_str())
    }

    /// The page transition used when none is configured.
    pub fn page() -> Self {
        Self::new("page")
    }

    /// The layout transition used when none is configured.
    pub fn layout() -> Self {
        Self::new("layout")
    }
}
