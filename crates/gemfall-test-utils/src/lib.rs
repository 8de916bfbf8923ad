//! Test utilities and board fixtures for Gemfall development.
//!
//! Boards are written as ASCII rows, top row first, so a fixture reads
//! the way the board looks on screen:
//!
//! | Glyph | Meaning |
//! |-------|---------|
//! | `.` | empty cell |
//! | `A`–`Z` | settled, swappable tile of that kind |
//! | `a`–`z` | unsettled tile of the uppercase kind |
//! | `#` | settled, unswappable blocker (kind [`BLOCKER`]) |

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gemfall_core::{CellCoord, TileKind};
use gemfall_engine::{AnimationMode, Board, BoardConfig, Playfield};
use gemfall_space::TileGrid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Kind used for `#` blockers. Never equal to a letter kind.
pub const BLOCKER: TileKind = TileKind(0);

/// The tile kind written as `glyph` (case-insensitive).
pub fn kind(glyph: char) -> TileKind {
    TileKind(glyph.to_ascii_uppercase() as u32)
}

/// Shorthand for [`CellCoord::new`].
pub fn c(x: u32, y: u32) -> CellCoord {
    CellCoord::new(x, y)
}

/// Build a board from ASCII rows, top row first.
///
/// # Panics
///
/// Panics on ragged rows, an empty fixture, or an unknown glyph.
pub fn board_from_rows(rows: &[&str]) -> Board {
    assert!(!rows.is_empty(), "fixture has no rows");
    let height = rows.len() as u32;
    let width = rows[0].chars().count() as u32;
    let mut board = Board::new(width, height).expect("fixture dimensions");
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count() as u32,
            width,
            "ragged fixture row {row}: {line:?}"
        );
        let y = height - 1 - row as u32;
        for (x, glyph) in line.chars().enumerate() {
            let coord = c(x as u32, y);
            match glyph {
                '.' => {}
                '#' => {
                    board
                        .place(coord, BLOCKER)
                        .expect("fresh cell")
                        .set_swappable(false);
                }
                g if g.is_ascii_uppercase() => {
                    board.place(coord, kind(g)).expect("fresh cell");
                }
                g if g.is_ascii_lowercase() => {
                    board
                        .place(coord, kind(g))
                        .expect("fresh cell")
                        .set_settled(false);
                }
                other => panic!("unknown fixture glyph {other:?}"),
            }
        }
    }
    board
}

/// Render a board back to ASCII rows, top row first.
pub fn render(board: &Board) -> Vec<String> {
    (0..board.height())
        .rev()
        .map(|y| {
            (0..board.width())
                .map(|x| match board.tile(c(x, y)) {
                    None => '.',
                    Some(t) if t.kind() == BLOCKER => '#',
                    Some(t) => {
                        let glyph = char::from_u32(t.kind().0).unwrap_or('?');
                        if t.is_settled() {
                            glyph
                        } else {
                            glyph.to_ascii_lowercase()
                        }
                    }
                })
                .collect()
        })
        .collect()
}

/// A playfield around a fixture board.
pub fn playfield_from_rows(rows: &[&str], animation: AnimationMode) -> Playfield {
    let config = BoardConfig {
        animation,
        ..BoardConfig::default()
    };
    Playfield::with_board(config, board_from_rows(rows))
}

/// A fully occupied board of settled tiles drawn from `kinds` letters
/// starting at `A`, deterministic for a given `seed`.
pub fn random_board(width: u32, height: u32, kinds: u32, seed: u64) -> Board {
    assert!((1..=26).contains(&kinds), "kinds must be 1..=26");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::new(width, height).expect("random board dimensions");
    for y in 0..height {
        for x in 0..width {
            let letter = b'A' + rng.random_range(0..kinds) as u8;
            board
                .place(c(x, y), kind(letter as char))
                .expect("fresh cell");
        }
    }
    board
}
