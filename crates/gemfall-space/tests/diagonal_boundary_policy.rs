//! Pins the boundary gate of the diagonal and all-neighbour sequences.
//!
//! Cardinal neighbours use a strict on-board test for the up and right
//! sides; diagonal probes use `y < height` / `x < width`, which holds for
//! every on-board cell. Consumers depend on exactly which directions are
//! probed, so a change to either gate must fail here.

use gemfall_core::CellCoord;
use gemfall_space::{
    all_probes, cardinal_neighbours, diagonal_neighbours, diagonal_probes, Direction, GridDims,
};

fn c(x: u32, y: u32) -> CellCoord {
    CellCoord::new(x, y)
}

#[test]
fn diagonal_probe_table_3x3() {
    let dims = GridDims::new(3, 3).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            let probed: Vec<Direction> =
                diagonal_probes(dims, c(x, y)).map(|p| p.direction).collect();
            let mut expected = vec![Direction::UpRight];
            if y > 0 {
                expected.push(Direction::RightDown);
            }
            if y > 0 && x > 0 {
                expected.push(Direction::DownLeft);
            }
            if x > 0 {
                expected.push(Direction::LeftUp);
            }
            assert_eq!(probed, expected, "probe set of ({x}, {y})");
        }
    }
}

#[test]
fn diagonal_gate_is_looser_than_cardinal_on_right_edge() {
    let dims = GridDims::new(3, 3).unwrap();
    let cell = c(2, 1);

    // No cardinal step to the right exists...
    assert!(!cardinal_neighbours(dims, cell).any(|n| n.x == 3));

    // ...but the right-facing diagonals are still probed, unresolved.
    let right_facing: Vec<_> = diagonal_probes(dims, cell)
        .filter(|p| matches!(p.direction, Direction::UpRight | Direction::RightDown))
        .collect();
    assert_eq!(right_facing.len(), 2);
    assert!(right_facing.iter().all(|p| p.target.is_none()));

    // Resolved diagonals skip them.
    let resolved: Vec<_> = diagonal_neighbours(dims, cell).collect();
    assert_eq!(resolved, vec![c(1, 0), c(1, 2)]);
}

#[test]
fn all_probes_on_top_right_corner() {
    let dims = GridDims::new(3, 3).unwrap();
    let probed: Vec<(Direction, Option<CellCoord>)> = all_probes(dims, c(2, 2))
        .map(|p| (p.direction, p.target))
        .collect();
    assert_eq!(
        probed,
        vec![
            (Direction::Up, None),
            (Direction::UpRight, None),
            (Direction::Right, None),
            (Direction::RightDown, None),
            (Direction::Down, Some(c(2, 1))),
            (Direction::DownLeft, Some(c(1, 1))),
            (Direction::Left, Some(c(1, 2))),
            (Direction::LeftUp, None),
        ]
    );
}

#[test]
fn origin_probes_only_up_and_right_sides() {
    let dims = GridDims::new(3, 3).unwrap();
    let probed: Vec<Direction> = all_probes(dims, c(0, 0)).map(|p| p.direction).collect();
    assert_eq!(
        probed,
        vec![Direction::Up, Direction::UpRight, Direction::Right]
    );
}
