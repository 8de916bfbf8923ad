//! Board state and turn flow for Gemfall.
//!
//! Provides the owning [`Board`], the [`SwapMediator`] selection state
//! machine, and [`Playfield`], which ties them together: a player
//! selects a tile, selects an adjacent target, the swap commits, and a
//! detection pass claims and clears every chain the swap created.
//!
//! # Ownership model
//!
//! The board owns every tile. A tile's back-reference to its cell is a
//! plain coordinate, updated by the board whenever the tile moves. Rule
//! queries borrow the board immutably through
//! [`TileGrid`](gemfall_space::TileGrid); only the playfield mutates it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod metrics;
pub mod playfield;
pub mod swap;

pub use board::Board;
pub use config::{AnimationMode, BoardConfig, ConfigError};
pub use metrics::PassMetrics;
pub use playfield::{Detonation, PassReport, Playfield, SelectOutcome};
pub use swap::{SwapMediator, SwapOutcome, SwapState};
