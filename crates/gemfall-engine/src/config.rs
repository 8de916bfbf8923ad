//! Board configuration, validation, and error types.
//!
//! [`BoardConfig`] is the builder input for a [`Playfield`](crate::Playfield).
//! [`validate()`](BoardConfig::validate) checks structural invariants
//! before any board storage is allocated.

use std::error::Error;
use std::fmt;

use gemfall_core::BoardError;
use gemfall_space::GridDims;

// ── AnimationMode ──────────────────────────────────────────────────

/// Whether an animation subsystem sits between swap and match check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationMode {
    /// No animation: the post-swap check runs as soon as the swap commits.
    #[default]
    Immediate,
    /// The swap enters `AnimatingSwap`. Both moved tiles are unsettled
    /// until [`Playfield::finish_swap`](crate::Playfield::finish_swap)
    /// reports the animation complete and runs the check.
    Deferred,
}

// ── BoardConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Playfield`](crate::Playfield).
#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Number of columns. Must be non-zero.
    pub width: u32,
    /// Number of rows. Must be non-zero.
    pub height: u32,
    /// How swaps hand over to the match check.
    pub animation: AnimationMode,
    /// Remove claimed tiles at the end of a detection pass. When `false`
    /// the pass only reports what it would destroy.
    pub clear_claimed: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            animation: AnimationMode::Immediate,
            clear_claimed: true,
        }
    }
}

impl BoardConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dims().map(|_| ())
    }

    /// Validated board extents.
    pub fn dims(&self) -> Result<GridDims, ConfigError> {
        GridDims::new(self.width, self.height).map_err(ConfigError::Dimensions)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BoardConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is unusable.
    Dimensions(BoardError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions(e) => write!(f, "invalid board dimensions: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dimensions(e) => Some(e),
        }
    }
}
