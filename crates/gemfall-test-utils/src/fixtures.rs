//! Named board scenarios shared by integration tests and benches.
//!
//! All fixtures are top row first; see the crate docs for glyphs.

/// 3×3, `R` along the bottom row, everything else empty.
pub const ROW_OF_THREE: [&str; 3] = ["...", "...", "RRR"];

/// Three `R` in an L: no run anywhere.
pub const L_SHAPE: [&str; 3] = ["...", "R..", "RR."];

/// Five `R` in a row across a 5×1 board.
pub const RUN_OF_FIVE: [&str; 1] = ["RRRRR"];

/// Four `R` in a row, unrelated kinds around it.
pub const RUN_OF_FOUR: [&str; 2] = ["GBGB", "RRRR"];

/// Plus shape of `R` centred on (1,1): a vertical and a horizontal run
/// sharing the centre.
pub const PLUS: [&str; 3] = [".R.", "RRR", ".R."];

/// T shape: a horizontal run on top with a stem of one below the centre.
pub const T_SHAPE: [&str; 3] = ["RRR", ".R.", ".G."];

/// Swapping (1,0) and (1,1) drops the `R` into the bottom row, making
/// `RRR`, and lifts the `G` into the middle row, making `GGG`.
pub const SWAP_MAKES_TWO_RUNS: [&str; 3] = ["BGB", "GRG", "RGR"];

/// Swapping (2,0) and (3,0) completes nothing.
pub const SWAP_MAKES_NOTHING: [&str; 2] = ["BGBG", "RGBR"];
