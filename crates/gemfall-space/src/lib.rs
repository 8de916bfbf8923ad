//! Board geometry for Gemfall.
//!
//! This crate defines the [`TileGrid`] trait, the capability through which
//! the rule engine reads a board, along with [`GridDims`] bounds handling
//! and the neighbour sequences every match and chain query is built on.
//!
//! # Neighbourhoods
//!
//! - [`cardinal_neighbours`]: up, right, down, left.
//! - [`diagonal_neighbours`]: up-right, right-down, down-left, left-up.
//! - [`all_neighbours`]: the two interleaved, clockwise from up.
//!
//! Adjacency is never stored. It is always derived from a coordinate and
//! the board's extents, so the neighbour graph is the implicit grid graph.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod direction;
pub mod neighbours;
pub mod space;

#[cfg(test)]
pub(crate) mod compliance;

pub use dims::GridDims;
pub use direction::Direction;
pub use neighbours::{
    all_neighbours, all_probes, cardinal_neighbours, diagonal_neighbours, diagonal_probes,
    is_neighbour, NeighbourList, NeighbourProbe, NeighbourScope,
};
pub use space::TileGrid;
