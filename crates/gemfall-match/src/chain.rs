//! Flood-fill from one matched cell to its full destruction chain.
//!
//! Starting from a cell with no starter, the builder claims that cell as
//! order 0 of a new chain. Any cell it visits then claims each cardinal
//! neighbour that matches it and lies in a run with it, at the visiting
//! cell's order plus one, and visits the claimed neighbours in turn.
//!
//! Wave orders are threaded explicitly. A visit at order `k` hands its
//! i-th claimed neighbour (0-based) the order `k + i` for that
//! neighbour's own visit, so later siblings see strictly larger orders
//! even at equal distance from the starter. Each visit returns the order
//! it would hand to one more sibling, `k + claimed`.
//!
//! Visits run on an explicit stack in the same depth-first order a
//! recursive walk would take, so chain size is not bounded by the call
//! stack.

use gemfall_core::{CellCoord, WaveOrder};
use gemfall_space::{cardinal_neighbours, TileGrid};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::detect::{in_triplet, is_valid_match, match_in_line};
use crate::ledger::ClaimLedger;

/// One pending visit: the order its next child will receive, the
/// neighbours it claimed, and how many of those have been visited.
struct Visit {
    order: WaveOrder,
    claimed: SmallVec<[CellCoord; 4]>,
    next: usize,
}

impl Visit {
    /// Claim every qualifying cardinal neighbour of `cell` at `order + 1`.
    fn open<G, L>(
        grid: &G,
        ledger: &mut L,
        cell: CellCoord,
        starter: CellCoord,
        order: WaveOrder,
    ) -> Self
    where
        G: TileGrid + ?Sized,
        L: ClaimLedger + ?Sized,
    {
        let mut claimed = SmallVec::new();
        for neighbour in cardinal_neighbours(grid.dims(), cell) {
            if !is_valid_match(grid, neighbour, cell) || !match_in_line(grid, cell, neighbour) {
                continue;
            }
            let granted = ledger.prepare_to_detonate(neighbour, order.next(), starter);
            trace!(%cell, %neighbour, %starter, order = %order.next(), granted, "claim");
            if granted {
                claimed.push(neighbour);
            }
        }
        Self {
            order,
            claimed,
            next: 0,
        }
    }
}

/// Claim the destruction chain reachable from `cell`.
///
/// With `starter == None`, first claims `cell` itself as order 0 of a new
/// chain; if the ledger refuses (another chain already owns `cell`), the
/// call aborts and returns `None`. With `Some(starter)`, `cell` is taken
/// to be already claimed under `starter` and the walk continues from it
/// at `order`. The ledger must already hold `starter`'s own start claim:
/// [`DetonationLedger`](crate::DetonationLedger) refuses member claims for
/// a starter that has not begun a chain, so the walk then claims nothing.
///
/// Returns the order this visit would hand to one more sibling. The
/// claimed set and each member's wave order accumulate in `ledger`.
pub fn build_destruction_lists<G, L>(
    grid: &G,
    ledger: &mut L,
    cell: CellCoord,
    starter: Option<CellCoord>,
    order: WaveOrder,
) -> Option<WaveOrder>
where
    G: TileGrid + ?Sized,
    L: ClaimLedger + ?Sized,
{
    let (starter, order) = match starter {
        Some(starter) => (starter, order),
        None => {
            if !ledger.prepare_to_detonate(cell, WaveOrder::START, cell) {
                debug!(%cell, "chain start refused: cell already in a chain");
                return None;
            }
            (cell, WaveOrder::START)
        }
    };

    let mut stack = vec![Visit::open(grid, ledger, cell, starter, order)];
    let mut finished = order;
    while let Some(top) = stack.last_mut() {
        if let Some(&child) = top.claimed.get(top.next) {
            let child_order = top.order;
            top.order = top.order.next();
            top.next += 1;
            let visit = Visit::open(grid, ledger, child, starter, child_order);
            stack.push(visit);
        } else {
            finished = top.order;
            stack.pop();
        }
    }

    debug!(%starter, %cell, final_order = %finished, "chain walk complete");
    Some(finished)
}

/// If the tile at `cell` is in a run, build its chain.
///
/// Returns `true` if a new chain was started at `cell`; `false` if there
/// is no run, or the cell already belongs to a chain this pass.
pub fn check_for_triplet<G, L>(grid: &G, ledger: &mut L, cell: CellCoord) -> bool
where
    G: TileGrid + ?Sized,
    L: ClaimLedger + ?Sized,
{
    if !in_triplet(grid, cell) {
        return false;
    }
    build_destruction_lists(grid, ledger, cell, None, WaveOrder::START).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::DetonationLedger;
    use crate::test_grid::TestGrid;

    fn c(x: u32, y: u32) -> CellCoord {
        CellCoord::new(x, y)
    }

    fn order_of(ledger: &DetonationLedger, cell: CellCoord) -> u32 {
        ledger.claim(cell).expect("cell claimed").order.0
    }

    #[test]
    fn row_of_three_from_middle() {
        let g = TestGrid::from_rows(&["...", "...", "RRR"]);
        let mut l = DetonationLedger::new();
        let end = build_destruction_lists(&g, &mut l, c(1, 0), None, WaveOrder(0));
        assert_eq!(end, Some(WaveOrder(2)));
        let claimed: Vec<_> = l.iter().map(|(cell, _)| cell).collect();
        assert_eq!(claimed, vec![c(1, 0), c(2, 0), c(0, 0)]);
        assert_eq!(order_of(&l, c(1, 0)), 0);
        assert_eq!(order_of(&l, c(2, 0)), 1);
        assert_eq!(order_of(&l, c(0, 0)), 1);
    }

    #[test]
    fn explicit_starter_skips_start_claim() {
        let g = TestGrid::from_rows(&["RRR"]);
        let mut l = DetonationLedger::new();
        assert!(l.prepare_to_detonate(c(0, 0), WaveOrder(0), c(0, 0)));
        let end = build_destruction_lists(&g, &mut l, c(0, 0), Some(c(0, 0)), WaveOrder(4));
        assert_eq!(end, Some(WaveOrder(5)));
        assert_eq!(order_of(&l, c(1, 0)), 5);
        // (1,0) is visited at order 4 and claims (2,0) at 5.
        assert_eq!(order_of(&l, c(2, 0)), 5);
    }

    #[test]
    fn explicit_starter_without_start_claim_claims_nothing() {
        let g = TestGrid::from_rows(&["RRR"]);
        let mut l = DetonationLedger::new();
        let end = build_destruction_lists(&g, &mut l, c(0, 0), Some(c(0, 0)), WaveOrder(0));
        assert_eq!(end, Some(WaveOrder(0)));
        assert!(l.is_empty());
        assert_eq!(l.refused(), 1);
    }

    #[test]
    fn start_on_claimed_cell_aborts() {
        let g = TestGrid::from_rows(&["RRR"]);
        let mut l = DetonationLedger::new();
        assert!(build_destruction_lists(&g, &mut l, c(0, 0), None, WaveOrder(0)).is_some());
        let before = l.len();
        assert_eq!(
            build_destruction_lists(&g, &mut l, c(2, 0), None, WaveOrder(0)),
            None
        );
        assert_eq!(l.len(), before);
        assert_eq!(l.chain_count(), 1);
    }

    #[test]
    fn sibling_orders_increase_within_one_visit() {
        // Plus shape centred on (1,1): all four arms are claimed at 1 by
        // the centre; the arms are then visited at 0, 1, 2, 3.
        let g = TestGrid::from_rows(&[".R.", "RRR", ".R."]);
        let mut l = DetonationLedger::new();
        let end = build_destruction_lists(&g, &mut l, c(1, 1), None, WaveOrder(0));
        assert_eq!(end, Some(WaveOrder(4)));
        for arm in [c(1, 2), c(2, 1), c(1, 0), c(0, 1)] {
            assert_eq!(order_of(&l, arm), 1);
        }
        assert_eq!(l.len(), 5);
    }

    #[test]
    fn l_shape_claims_nothing_beyond_start() {
        let g = TestGrid::from_rows(&["R..", "RR."]);
        let mut l = DetonationLedger::new();
        build_destruction_lists(&g, &mut l, c(0, 0), None, WaveOrder(0));
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn check_for_triplet_requires_a_run() {
        let g = TestGrid::from_rows(&["RRG"]);
        let mut l = DetonationLedger::new();
        assert!(!check_for_triplet(&g, &mut l, c(0, 0)));
        assert!(l.is_empty());
    }

    #[test]
    fn unsettled_member_stops_the_fill() {
        let g = TestGrid::from_rows(&["RRRr"]);
        let mut l = DetonationLedger::new();
        assert!(check_for_triplet(&g, &mut l, c(0, 0)));
        assert_eq!(l.len(), 3);
        assert!(!l.is_claimed(c(3, 0)));
    }
}
