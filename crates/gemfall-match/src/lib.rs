//! Run detection and chain claiming for Gemfall.
//!
//! Three layers, leaf-first:
//!
//! - [`detect`]: local 3-in-a-row detection. No row or column scan; a run
//!   is recognised from one pair of adjacent matching cells and the two
//!   positions where a third member could sit.
//! - [`ledger`]: the [`ClaimLedger`] contract and [`DetonationLedger`],
//!   the per-pass record of which chain owns which cell.
//! - [`chain`]: flood-fill from one matched cell, claiming every
//!   transitively matching neighbour exactly once with a wave order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod detect;
pub mod ledger;

#[cfg(test)]
pub(crate) mod test_grid;

pub use chain::{build_destruction_lists, check_for_triplet};
pub use detect::{in_triplet, is_valid_match, match_in_line};
pub use ledger::{Chain, ChainMember, Claim, ClaimLedger, DetonationLedger};
