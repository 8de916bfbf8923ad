//! Core types for the Gemfall match-3 rule engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Gemfall crate: cell coordinates,
//! tile identifiers and kinds, wave orders, the [`Tile`] itself, and the
//! board construction error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod tile;

pub use error::BoardError;
pub use id::{CellCoord, TileId, TileKind, WaveOrder};
pub use tile::Tile;
