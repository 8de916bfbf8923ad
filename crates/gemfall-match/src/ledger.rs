//! Chain ownership records.
//!
//! Several cells of one run can each notice the match in the same pass.
//! The ledger makes that idempotent: the first chain to claim a cell owns
//! it, and any later claim on that cell is refused. The refusal doubles
//! as the visited marker that bounds the flood fill on the cyclic grid
//! graph.
//!
//! A [`DetonationLedger`] lives for one detection pass. Clear it (or
//! build a new one) before the next pass.

use gemfall_core::{CellCoord, WaveOrder};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// One cell's membership in a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claim {
    /// The cell whose detection started the chain.
    pub starter: CellCoord,
    /// Stagger index within the chain.
    pub order: WaveOrder,
}

/// Arbitrates which chain owns which cell.
pub trait ClaimLedger {
    /// Try to claim `cell` for the chain started at `starter`.
    ///
    /// Returns `false` if the claim is refused, in which case the caller
    /// must not propagate through `cell`. A start request has
    /// `cell == starter`.
    fn prepare_to_detonate(&mut self, cell: CellCoord, order: WaveOrder, starter: CellCoord)
        -> bool;
}

/// A claimed cell together with its wave order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainMember {
    /// The claimed cell.
    pub cell: CellCoord,
    /// Stagger index within the chain.
    pub order: WaveOrder,
}

/// Every cell claimed under one starter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    /// The chain's starter cell.
    pub starter: CellCoord,
    /// Members in ascending wave order; ties keep claim order.
    pub members: Vec<ChainMember>,
}

impl Chain {
    /// Number of claimed cells, starter included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the chain has no members. Never true for a ledger chain.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `cell` belongs to this chain.
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.members.iter().any(|m| m.cell == cell)
    }
}

/// Insertion-ordered claim record for one detection pass.
///
/// Rules:
/// - a cell holds at most one claim;
/// - any claim on an already claimed cell is refused, whichever chain
///   holds it;
/// - a non-start claim is refused unless its starter has itself been
///   claimed as the start of its own chain.
#[derive(Clone, Debug, Default)]
pub struct DetonationLedger {
    claims: IndexMap<CellCoord, Claim>,
    refused: usize,
}

impl DetonationLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The claim on `cell`, if any.
    pub fn claim(&self, cell: CellCoord) -> Option<Claim> {
        self.claims.get(&cell).copied()
    }

    /// Whether `cell` has been claimed this pass.
    pub fn is_claimed(&self, cell: CellCoord) -> bool {
        self.claims.contains_key(&cell)
    }

    /// Number of claimed cells.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Number of refused claim requests since the last clear.
    pub fn refused(&self) -> usize {
        self.refused
    }

    /// Claims in the order they were granted.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, Claim)> + '_ {
        self.claims.iter().map(|(cell, claim)| (*cell, *claim))
    }

    /// Distinct starters, in the order their chains began.
    pub fn starters(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.claims
            .iter()
            .filter(|(cell, claim)| **cell == claim.starter)
            .map(|(cell, _)| *cell)
    }

    /// Number of chains started this pass.
    pub fn chain_count(&self) -> usize {
        self.starters().count()
    }

    /// The chain started at `starter`, or `None` if no such chain exists.
    pub fn chain(&self, starter: CellCoord) -> Option<Chain> {
        let head = self.claims.get(&starter)?;
        if head.starter != starter {
            return None;
        }
        let mut members: Vec<ChainMember> = self
            .claims
            .iter()
            .filter(|(_, claim)| claim.starter == starter)
            .map(|(cell, claim)| ChainMember {
                cell: *cell,
                order: claim.order,
            })
            .collect();
        members.sort_by_key(|m| m.order);
        Some(Chain { starter, members })
    }

    /// All chains, in the order they began.
    pub fn chains(&self) -> Vec<Chain> {
        self.starters().filter_map(|s| self.chain(s)).collect()
    }

    /// Forget every claim, ready for the next pass.
    pub fn clear(&mut self) {
        self.claims.clear();
        self.refused = 0;
    }
}

impl ClaimLedger for DetonationLedger {
    fn prepare_to_detonate(
        &mut self,
        cell: CellCoord,
        order: WaveOrder,
        starter: CellCoord,
    ) -> bool {
        if let Some(existing) = self.claims.get(&cell) {
            debug!(
                %cell,
                %starter,
                owner = %existing.starter,
                "claim refused: cell already owned"
            );
            self.refused += 1;
            return false;
        }
        if cell != starter {
            let started = self
                .claims
                .get(&starter)
                .is_some_and(|head| head.starter == starter);
            if !started {
                warn!(%cell, %starter, "claim refused: starter has not begun a chain");
                self.refused += 1;
                return false;
            }
        }
        self.claims.insert(cell, Claim { starter, order });
        true
    }
}
