//! Gemfall: a match-3 rules engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Gemfall sub-crates. For most users, adding `gemfall` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gemfall::prelude::*;
//!
//! // Bottom row R G R, middle row G R G.
//! let (r, g) = (TileKind(1), TileKind(2));
//! let mut board = Board::new(3, 2).unwrap();
//! for (x, k) in [r, g, r].into_iter().enumerate() {
//!     board.place(CellCoord::new(x as u32, 0), k).unwrap();
//! }
//! for (x, k) in [g, r, g].into_iter().enumerate() {
//!     board.place(CellCoord::new(x as u32, 1), k).unwrap();
//! }
//!
//! // Swapping the centre column completes a run in both rows.
//! let mut playfield = Playfield::with_board(BoardConfig::default(), board);
//! playfield.select(CellCoord::new(1, 1));
//! match playfield.select(CellCoord::new(1, 0)) {
//!     SelectOutcome::Resolved { report, .. } => {
//!         assert_eq!(report.chains.len(), 2);
//!         assert_eq!(report.detonations.len(), 6);
//!     }
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! assert_eq!(playfield.board().occupied(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gemfall-core` | Coordinates, IDs, tiles, board errors |
//! | [`space`] | `gemfall-space` | Grid extents, directions, neighbour queries |
//! | [`matching`] | `gemfall-match` | Run detection, chain flood-fill, claim ledger |
//! | [`engine`] | `gemfall-engine` | Board storage, swap state machine, detection passes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`gemfall-core`).
///
/// Contains [`types::CellCoord`], [`types::Tile`], [`types::WaveOrder`] and
/// the [`types::BoardError`] enum.
pub use gemfall_core as types;

/// Grid extents and neighbour queries (`gemfall-space`).
///
/// The [`space::TileGrid`] trait is the read-only board view every rule
/// in [`matching`] is written against.
pub use gemfall_space as space;

/// Run detection and chain claiming (`gemfall-match`).
///
/// [`matching::check_for_triplet`] is the entry point; implement
/// [`matching::ClaimLedger`] to receive claims somewhere other than the
/// bundled [`matching::DetonationLedger`].
pub use gemfall_match as matching;

/// Board storage and turn flow (`gemfall-engine`).
///
/// [`engine::Playfield`] ties a [`engine::Board`] to the
/// [`engine::SwapMediator`] and runs detection passes after each swap.
pub use gemfall_engine as engine;

/// Common imports for typical Gemfall usage.
///
/// ```rust
/// use gemfall::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gemfall_core::{BoardError, CellCoord, Tile, TileId, TileKind, WaveOrder};

    // Space
    pub use gemfall_space::{Direction, GridDims, NeighbourScope, TileGrid};

    // Matching
    pub use gemfall_match::{check_for_triplet, in_triplet, ClaimLedger, DetonationLedger};

    // Engine
    pub use gemfall_engine::{
        AnimationMode, Board, BoardConfig, PassReport, Playfield, SelectOutcome, SwapState,
    };
}
