//! Benchmark boards for the Gemfall rules engine.
//!
//! - [`reference_board`]: 100x100 fully occupied board, 5 kinds
//! - [`monochrome_board`]: every cell the same kind, one chain covering
//!   the whole board (worst case for flood-fill depth)
//! - [`cardinal_pairs`]: every horizontally or vertically adjacent pair

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gemfall_core::CellCoord;
use gemfall_engine::Board;
use gemfall_test_utils::random_board;

/// Side length of the reference board.
pub const REFERENCE_SIDE: u32 = 100;

/// 100x100 board of settled tiles drawn from 5 kinds.
pub fn reference_board(seed: u64) -> Board {
    random_board(REFERENCE_SIDE, REFERENCE_SIDE, 5, seed)
}

/// A `width` x `height` board where every tile has the same kind.
pub fn monochrome_board(width: u32, height: u32) -> Board {
    random_board(width, height, 1, 0)
}

/// All cardinally adjacent cell pairs of a `width` x `height` board,
/// each listed once with the lower cell first.
pub fn cardinal_pairs(width: u32, height: u32) -> Vec<(CellCoord, CellCoord)> {
    let mut pairs = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let here = CellCoord::new(x, y);
            if x + 1 < width {
                pairs.push((here, CellCoord::new(x + 1, y)));
            }
            if y + 1 < height {
                pairs.push((here, CellCoord::new(x, y + 1)));
            }
        }
    }
    pairs
}
