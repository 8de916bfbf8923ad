//! Swap selection state machine.
//!
//! ```text
//!            choose_swap_target            swap_tile (Deferred)
//!   Idle ─────────────────────▶ TargetSelected ─────────────────▶ AnimatingSwap
//!    ▲  ◀───────────────────────────┘  │                               │
//!    │          unselect               │ swap_tile (Immediate)         │ finish_swap
//!    └─────────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! While a target is selected, `choose_swap_target` on a different cell is
//! a swap attempt, exactly like `swap_tile`.
//!
//! Invalid requests (unsettled, unswappable, non-adjacent, or arriving in
//! the wrong state) are ignored and leave the state unchanged. At most one
//! swap is in flight per board.

use gemfall_core::CellCoord;
use gemfall_space::{is_neighbour, NeighbourScope, TileGrid};
use tracing::debug;

use crate::board::Board;
use crate::config::AnimationMode;

/// Where the mediator is in the select / swap / animate cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapState {
    /// No selection.
    Idle,
    /// A first cell has been chosen; the next valid target swaps with it.
    TargetSelected(CellCoord),
    /// Occupants exchanged, waiting for the animation-complete signal.
    AnimatingSwap {
        /// The cell selected first.
        from: CellCoord,
        /// The cell it swapped with.
        to: CellCoord,
    },
}

/// What a mediator request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Nothing happened.
    Ignored,
    /// The cell became the swap target.
    Selected(CellCoord),
    /// Occupants exchanged; the post-swap check is due now.
    Committed {
        /// The cell selected first.
        from: CellCoord,
        /// The cell it swapped with.
        to: CellCoord,
    },
    /// Occupants exchanged; the post-swap check waits for `finish_swap`.
    Animating {
        /// The cell selected first.
        from: CellCoord,
        /// The cell it swapped with.
        to: CellCoord,
    },
}

/// Per-board swap selection state.
#[derive(Clone, Debug)]
pub struct SwapMediator {
    state: SwapState,
    mode: AnimationMode,
}

impl SwapMediator {
    /// Create an idle mediator.
    pub fn new(mode: AnimationMode) -> Self {
        Self {
            state: SwapState::Idle,
            mode,
        }
    }

    /// Current state.
    pub fn state(&self) -> SwapState {
        self.state
    }

    /// The cell currently chosen as swap target, if any.
    pub fn selected(&self) -> Option<CellCoord> {
        match self.state {
            SwapState::TargetSelected(cell) => Some(cell),
            _ => None,
        }
    }

    /// Whether `cell` may start a new swap: it holds a settled tile and
    /// no selection or swap is pending.
    pub fn can_begin_swap<G: TileGrid + ?Sized>(&self, grid: &G, cell: CellCoord) -> bool {
        grid.settled_tile(cell).is_some() && self.state == SwapState::Idle
    }

    /// Make `cell` the swap target.
    ///
    /// From `Idle` this selects `cell` if
    /// [`can_begin_swap`](Self::can_begin_swap) holds. With a different
    /// cell already selected, the call is a swap attempt and behaves as
    /// [`swap_tile`](Self::swap_tile).
    pub fn choose_swap_target(&mut self, board: &mut Board, cell: CellCoord) -> SwapOutcome {
        if let SwapState::TargetSelected(selected) = self.state {
            if selected != cell {
                return self.swap_tile(board, cell);
            }
        }
        if !self.can_begin_swap(&*board, cell) {
            debug!(%cell, state = ?self.state, "swap target ignored");
            return SwapOutcome::Ignored;
        }
        self.state = SwapState::TargetSelected(cell);
        SwapOutcome::Selected(cell)
    }

    /// Drop a pending selection. Has no effect during an animation.
    pub fn unselect(&mut self) {
        if let SwapState::TargetSelected(_) = self.state {
            self.state = SwapState::Idle;
        }
    }

    /// Whether `cell` may swap with the current selection: a distinct,
    /// cardinally adjacent cell, both holding settled swappable tiles.
    pub fn can_swap_with_selected<G: TileGrid + ?Sized>(&self, grid: &G, cell: CellCoord) -> bool {
        let Some(selected) = self.selected() else {
            return false;
        };
        if !is_neighbour(grid.dims(), selected, cell, NeighbourScope::Cardinal) {
            return false;
        }
        let movable = |c: CellCoord| grid.settled_tile(c).is_some_and(|t| t.is_swappable());
        movable(selected) && movable(cell)
    }

    /// Swap `cell` with the current selection if allowed.
    ///
    /// In [`AnimationMode::Immediate`] the mediator returns to `Idle` and
    /// reports [`SwapOutcome::Committed`]. In [`AnimationMode::Deferred`]
    /// both moved tiles are unsettled and the mediator waits in
    /// `AnimatingSwap` for [`finish_swap`](Self::finish_swap).
    pub fn swap_tile(&mut self, board: &mut Board, cell: CellCoord) -> SwapOutcome {
        if !self.can_swap_with_selected(&*board, cell) {
            debug!(%cell, state = ?self.state, "swap request ignored");
            return SwapOutcome::Ignored;
        }
        let Some(from) = self.selected() else {
            return SwapOutcome::Ignored;
        };
        if let Err(e) = board.swap_occupants(from, cell) {
            debug!(%from, to = %cell, error = %e, "swap rejected by board");
            return SwapOutcome::Ignored;
        }

        match self.mode {
            AnimationMode::Immediate => {
                self.state = SwapState::Idle;
                SwapOutcome::Committed { from, to: cell }
            }
            AnimationMode::Deferred => {
                for c in [from, cell] {
                    if let Some(tile) = board.tile_mut(c) {
                        tile.set_settled(false);
                    }
                }
                self.state = SwapState::AnimatingSwap { from, to: cell };
                SwapOutcome::Animating { from, to: cell }
            }
        }
    }

    /// Animation-complete signal. Re-settles the moved tiles and returns
    /// the swapped pair for the deferred check, or `None` if no swap was
    /// animating.
    pub fn finish_swap(&mut self, board: &mut Board) -> Option<(CellCoord, CellCoord)> {
        let SwapState::AnimatingSwap { from, to } = self.state else {
            return None;
        };
        for c in [from, to] {
            if let Some(tile) = board.tile_mut(c) {
                tile.set_settled(true);
            }
        }
        self.state = SwapState::Idle;
        Some((from, to))
    }
}
