// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! These types normalize caller-supplied values instead of rejecting them:
//! a malformed notify request must still produce a visible toast.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// Position
// =============================================================================

/// Screen anchor a toast is grouped under. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    /// Top edge, horizontally centered (default).
    #[default]
    Top,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom edge, horizontally centered.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Position {
    /// Every anchor, top anchors first.
    pub const ALL: [Position; 6] = [
        Position::Top,
        Position::TopLeft,
        Position::TopRight,
        Position::Bottom,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Parses an anchor name, falling back to [`Position::Top`] for anything
    /// unrecognized.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Returns the kebab-case name used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::Bottom => "bottom",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Returns true for anchors on the bottom edge.
    ///
    /// Stacking is mirrored there: the newest toast sits nearest the bottom
    /// edge and therefore gets the lowest stacking order.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            Position::Bottom | Position::BottomLeft | Position::BottomRight
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by the strict [`FromStr`] impl of [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toast position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Position::ALL
            .into_iter()
            .find(|position| position.name() == normalized)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

// =============================================================================
// DismissAfter
// =============================================================================

/// Auto-dismiss policy of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissAfter {
    /// Stays until closed explicitly.
    #[default]
    Never,
    /// Closes once visible and unhovered for this long. Always non-zero.
    After(Duration),
}

impl DismissAfter {
    /// Builds a policy from a duration in seconds.
    ///
    /// Zero, negative, NaN and infinite values all mean "never".
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return DismissAfter::Never;
        }
        Duration::try_from_secs_f64(secs).map_or(DismissAfter::Never, Self::from_duration)
    }

    /// Builds a policy from a duration; a zero duration means "never".
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        if duration.is_zero() {
            DismissAfter::Never
        } else {
            DismissAfter::After(duration)
        }
    }

    /// Returns the dismiss delay, if any.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            DismissAfter::Never => None,
            DismissAfter::After(duration) => Some(duration),
        }
    }
}

// =============================================================================
// Intent
// =============================================================================

/// Severity tag of a toast. Purely presentational for the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    /// Neutral informational toast.
    #[default]
    None,
    /// Operation succeeded.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Danger,
}

impl Intent {
    /// Parses an intent name, falling back to [`Intent::None`].
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Intent::Success,
            "warning" => Intent::Warning,
            "danger" | "error" => Intent::Danger,
            _ => Intent::None,
        }
    }

    /// Returns the lowercase name of this intent.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Intent::None => "none",
            Intent::Success => "success",
            Intent::Warning => "warning",
            Intent::Danger => "danger",
        }
    }
}
