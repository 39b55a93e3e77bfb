mod combinatorics;
mod config;
mod error;
mod estimate;
mod material;
mod piece;
mod report;

pub use combinatorics::{
    combination, combination_with_repetition, exact_div, factorial, permutation,
};
pub use config::{DEFAULT_EXTRA_PIECES, LOMONOSOV_BYTES};
pub use error::{Error, Result};
pub use estimate::{board_positions, Estimate, SplitCount};
pub use material::{enumerate_tables, piece_multisets, Material, TableSplit};
pub use piece::PieceKind;
pub use report::Report;
