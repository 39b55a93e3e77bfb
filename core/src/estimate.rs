use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Serialize, Serializer};

use crate::combinatorics::combination_with_repetition;
use crate::config::{
    DEFAULT_EXTRA_PIECES, KING_SQUARES, LOMONOSOV_BYTES, NUM_PIECE_KINDS, OTHER_SQUARES,
};
use crate::error::Result;
use crate::material::TableSplit;

fn decimal<S: Serializer>(value: &BigUint, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn decimal_opt<S: Serializer>(
    value: &Option<BigUint>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SplitCount {
    pub split: TableSplit,
    #[serde(serialize_with = "decimal")]
    pub tables: BigUint,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Estimate {
    pub extra_pieces: u32,
    #[serde(serialize_with = "decimal")]
    pub byte_budget: BigUint,
    pub splits: Vec<SplitCount>,
    #[serde(serialize_with = "decimal")]
    pub tables: BigUint,
    /// Floor of `byte_budget / tables`; `None` when there are no tables.
    #[serde(serialize_with = "decimal_opt")]
    pub bytes_per_table: Option<BigUint>,
    #[serde(serialize_with = "decimal")]
    pub board_positions: BigUint,
    #[serde(serialize_with = "decimal")]
    pub total_bytes: BigUint,
}

/// Positions of one table: both kings on 64 squares, every other piece on
/// 64 squares or captured.
pub fn board_positions(extra_pieces: u32) -> BigUint {
    BigUint::from(KING_SQUARES).pow(2) * BigUint::from(OTHER_SQUARES).pow(extra_pieces)
}

fn bytes_per_table(byte_budget: &BigUint, tables: &BigUint) -> Option<BigUint> {
    if tables.is_zero() {
        None
    } else {
        Some(byte_budget / tables)
    }
}

impl Estimate {
    /// The 7-piece Lomonosov comparison: 5 extra pieces split 3v2 and 4v1,
    /// against a 140 TB budget.
    pub fn lomonosov() -> Result<Self> {
        let c1 = combination_with_repetition(NUM_PIECE_KINDS, 3)?
            * combination_with_repetition(NUM_PIECE_KINDS, 2)?;
        let c2 = combination_with_repetition(NUM_PIECE_KINDS, 4)?
            * combination_with_repetition(NUM_PIECE_KINDS, 1)?;
        let tables = &c1 + &c2;
        debug!("c1 = {}, c2 = {}, ct = {}", c1, c2, tables);

        let byte_budget = BigUint::from(LOMONOSOV_BYTES);
        let board_positions = board_positions(DEFAULT_EXTRA_PIECES);
        let total_bytes = &board_positions * &tables;
        debug!(
            "board positions = {}, total bytes = {}",
            board_positions, total_bytes
        );

        Ok(Self {
            extra_pieces: DEFAULT_EXTRA_PIECES,
            bytes_per_table: bytes_per_table(&byte_budget, &tables),
            byte_budget,
            splits: vec![
                SplitCount {
                    split: TableSplit::new(3, 2),
                    tables: c1,
                },
                SplitCount {
                    split: TableSplit::new(4, 1),
                    tables: c2,
                },
            ],
            tables,
            board_positions,
            total_bytes,
        })
    }

    pub fn new(extra_pieces: u32, byte_budget: BigUint) -> Result<Self> {
        let mut splits = Vec::new();
        let mut tables = BigUint::zero();
        for split in TableSplit::for_extra_pieces(extra_pieces) {
            let count = split.table_count()?;
            debug!("{} tables: {}", split, count);
            tables += &count;
            splits.push(SplitCount {
                split,
                tables: count,
            });
        }

        let board_positions = board_positions(extra_pieces);
        let total_bytes = &board_positions * &tables;
        debug!(
            "ct = {}, board positions = {}, total bytes = {}",
            tables, board_positions, total_bytes
        );

        Ok(Self {
            extra_pieces,
            bytes_per_table: bytes_per_table(&byte_budget, &tables),
            byte_budget,
            splits,
            tables,
            board_positions,
            total_bytes,
        })
    }

    /// True when these inputs are the ones `lomonosov()` computes with.
    pub fn is_default_config(extra_pieces: u32, byte_budget: &BigUint) -> bool {
        extra_pieces == DEFAULT_EXTRA_PIECES && *byte_budget == BigUint::from(LOMONOSOV_BYTES)
    }

    pub fn is_lomonosov(&self) -> bool {
        Self::is_default_config(self.extra_pieces, &self.byte_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn lomonosov_numbers() {
        let estimate = Estimate::lomonosov().unwrap();
        assert_eq!(estimate.splits[0].tables, big(525));
        assert_eq!(estimate.splits[1].tables, big(350));
        assert_eq!(estimate.tables, big(875));
        assert_eq!(estimate.bytes_per_table, Some(big(160_000_000_000)));
        assert_eq!(estimate.board_positions, big(4_752_550_400_000));
        assert_eq!(estimate.total_bytes, big(4_158_481_600_000_000));
        assert!(estimate.is_lomonosov());
    }

    #[test]
    fn general_form_agrees_with_lomonosov() {
        let general = Estimate::new(DEFAULT_EXTRA_PIECES, big(LOMONOSOV_BYTES)).unwrap();
        assert_eq!(general, Estimate::lomonosov().unwrap());
    }

    #[test]
    fn board_positions_by_piece_count() {
        assert_eq!(board_positions(0), big(4096));
        assert_eq!(board_positions(1), big(4096 * 65));
        assert_eq!(board_positions(5), big(4096) * big(1_160_290_625));
    }

    #[test]
    fn bytes_per_table_floors() {
        let estimate = Estimate::new(5, big(1000)).unwrap();
        // 1000 / 875
        assert_eq!(estimate.bytes_per_table, Some(big(1)));
        assert!(!estimate.is_lomonosov());
    }

    #[test]
    fn default_config_detection() {
        assert!(Estimate::is_default_config(5, &big(LOMONOSOV_BYTES)));
        assert!(!Estimate::is_default_config(4, &big(LOMONOSOV_BYTES)));
        assert!(!Estimate::is_default_config(5, &big(LOMONOSOV_BYTES - 1)));
    }

    #[test]
    fn no_tables_means_no_ratio() {
        for n in [0, 1] {
            let estimate = Estimate::new(n, big(LOMONOSOV_BYTES)).unwrap();
            assert!(estimate.splits.is_empty());
            assert_eq!(estimate.tables, big(0));
            assert_eq!(estimate.bytes_per_table, None);
            assert_eq!(estimate.total_bytes, big(0));
        }
    }

    #[test]
    fn four_extra_pieces() {
        let estimate = Estimate::new(4, big(LOMONOSOV_BYTES)).unwrap();
        // 2v2: 120, 3v1: 35 * 5
        assert_eq!(estimate.tables, big(120 + 175));
    }
}
