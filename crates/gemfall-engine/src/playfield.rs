//! Turn flow: selection, swap, detection pass, detonation.
//!
//! [`Playfield`] owns a [`Board`], its [`SwapMediator`] and the claim
//! ledger. Every detection pass starts from a cleared ledger, asks each
//! trigger cell whether it sits in a run, flood-fills the chains that
//! result, and (if configured) removes the claimed tiles.

use std::time::Instant;

use gemfall_core::{CellCoord, Tile, WaveOrder};
use gemfall_match::{check_for_triplet, Chain, DetonationLedger};
use gemfall_space::TileGrid;
use tracing::debug;

use crate::board::Board;
use crate::config::{BoardConfig, ConfigError};
use crate::metrics::PassMetrics;
use crate::swap::{SwapMediator, SwapOutcome, SwapState};

/// One tile destroyed (or, with `clear_claimed` off, marked) by a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detonation {
    /// The cell the tile occupied.
    pub cell: CellCoord,
    /// The tile itself.
    pub tile: Tile,
    /// Starter of the chain that claimed it.
    pub starter: CellCoord,
    /// Stagger index within that chain.
    pub order: WaveOrder,
}

/// Result of one detection pass.
#[derive(Clone, Debug, Default)]
pub struct PassReport {
    /// Chains claimed this pass, in the order they began.
    pub chains: Vec<Chain>,
    /// Claimed tiles, grouped by chain and ascending in wave order.
    pub detonations: Vec<Detonation>,
    /// Counters and timing for the pass.
    pub metrics: PassMetrics,
}

impl PassReport {
    /// Whether the pass found no runs.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// What a [`Playfield::select`] call did.
#[derive(Clone, Debug)]
pub enum SelectOutcome {
    /// Nothing happened.
    Ignored,
    /// The cell became the swap target.
    Selected(CellCoord),
    /// The swap is animating; call [`Playfield::finish_swap`] when done.
    Animating {
        /// The cell selected first.
        from: CellCoord,
        /// The cell it swapped with.
        to: CellCoord,
    },
    /// The swap committed and the post-swap pass ran.
    Resolved {
        /// The cell selected first.
        from: CellCoord,
        /// The cell it swapped with.
        to: CellCoord,
        /// The post-swap detection pass.
        report: PassReport,
    },
}

/// A board plus the state needed to play it.
pub struct Playfield {
    board: Board,
    swap: SwapMediator,
    ledger: DetonationLedger,
    config: BoardConfig,
    last_metrics: PassMetrics,
}

impl Playfield {
    /// Create a playfield with an empty board.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let dims = config.dims()?;
        Ok(Self::with_board(config, Board::with_dims(dims)))
    }

    /// Create a playfield around an existing board.
    ///
    /// The board's extents take precedence over `config.width` and
    /// `config.height`.
    pub fn with_board(mut config: BoardConfig, board: Board) -> Self {
        config.width = board.width();
        config.height = board.height();
        Self {
            swap: SwapMediator::new(config.animation),
            board,
            ledger: DetonationLedger::new(),
            config,
            last_metrics: PassMetrics::default(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for refill and gravity collaborators.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Active configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Swap state.
    pub fn swap_state(&self) -> SwapState {
        self.swap.state()
    }

    /// Metrics of the most recent pass.
    pub fn last_metrics(&self) -> &PassMetrics {
        &self.last_metrics
    }

    /// Claims left by the most recent pass.
    pub fn ledger(&self) -> &DetonationLedger {
        &self.ledger
    }

    /// Whether `cell` may start a new swap.
    pub fn can_begin_swap(&self, cell: CellCoord) -> bool {
        self.swap.can_begin_swap(&self.board, cell)
    }

    /// Make `cell` the swap target, or with a different cell already
    /// selected, attempt the swap as [`swap_tile`](Self::swap_tile) does.
    pub fn choose_swap_target(&mut self, cell: CellCoord) -> SelectOutcome {
        let outcome = self.swap.choose_swap_target(&mut self.board, cell);
        self.apply(outcome)
    }

    /// Whether `cell` may swap with the current selection.
    pub fn can_swap_with_selected(&self, cell: CellCoord) -> bool {
        self.swap.can_swap_with_selected(&self.board, cell)
    }

    /// Drop a pending selection.
    pub fn unselect(&mut self) {
        self.swap.unselect();
    }

    /// Player taps `cell`.
    ///
    /// The tap counts only if `cell` holds a settled, swappable tile. If no
    /// swap is pending it becomes the target; otherwise it is offered as
    /// the other half of a swap.
    pub fn select(&mut self, cell: CellCoord) -> SelectOutcome {
        let tappable = self
            .board
            .settled_tile(cell)
            .is_some_and(|t| t.is_swappable());
        if !tappable {
            return SelectOutcome::Ignored;
        }
        self.choose_swap_target(cell)
    }

    /// Swap `cell` with the current selection if allowed, running the
    /// post-swap pass now or after the animation completes.
    pub fn swap_tile(&mut self, cell: CellCoord) -> SelectOutcome {
        let outcome = self.swap.swap_tile(&mut self.board, cell);
        self.apply(outcome)
    }

    /// Run the post-swap pass for a committed swap.
    fn apply(&mut self, outcome: SwapOutcome) -> SelectOutcome {
        match outcome {
            SwapOutcome::Committed { from, to } => {
                let report = self.resolve_pass(&[from, to]);
                SelectOutcome::Resolved { from, to, report }
            }
            SwapOutcome::Animating { from, to } => SelectOutcome::Animating { from, to },
            SwapOutcome::Selected(c) => SelectOutcome::Selected(c),
            SwapOutcome::Ignored => SelectOutcome::Ignored,
        }
    }

    /// Animation-complete signal for a deferred swap. Runs the post-swap
    /// pass and returns it, or `None` if no swap was animating.
    pub fn finish_swap(&mut self) -> Option<PassReport> {
        let (from, to) = self.swap.finish_swap(&mut self.board)?;
        Some(self.resolve_pass(&[from, to]))
    }

    /// Run a detection pass from a single cell.
    pub fn check_for_triplet(&mut self, cell: CellCoord) -> PassReport {
        self.resolve_pass(&[cell])
    }

    /// Run one detection pass over `triggers`.
    ///
    /// Each trigger independently checks whether it is in a run and, if so,
    /// builds its chain. Triggers already claimed by an earlier trigger's
    /// chain are refused by the ledger, so a run is destroyed once however
    /// many of its cells are listed.
    pub fn resolve_pass(&mut self, triggers: &[CellCoord]) -> PassReport {
        let start = Instant::now();
        self.ledger.clear();

        let mut metrics = PassMetrics::default();
        for &cell in triggers {
            metrics.triggers += 1;
            if check_for_triplet(&self.board, &mut self.ledger, cell) {
                metrics.chains_started += 1;
            }
        }

        let chains = self.ledger.chains();
        let mut detonations = Vec::with_capacity(self.ledger.len());
        for chain in &chains {
            for member in &chain.members {
                let tile = if self.config.clear_claimed {
                    self.board.remove(member.cell).ok()
                } else {
                    self.board.tile(member.cell).cloned()
                };
                if let Some(tile) = tile {
                    detonations.push(Detonation {
                        cell: member.cell,
                        tile,
                        starter: chain.starter,
                        order: member.order,
                    });
                }
            }
        }

        metrics.cells_claimed = self.ledger.len();
        metrics.claims_refused = self.ledger.refused();
        if self.config.clear_claimed {
            metrics.tiles_cleared = detonations.len();
        }
        metrics.record_elapsed(start.elapsed());

        debug!(
            triggers = metrics.triggers,
            chains = metrics.chains_started,
            claimed = metrics.cells_claimed,
            refused = metrics.claims_refused,
            cleared = metrics.tiles_cleared,
            total_us = metrics.total_us,
            "detection pass"
        );
        self.last_metrics = metrics.clone();

        PassReport {
            chains,
            detonations,
            metrics,
        }
    }
}
