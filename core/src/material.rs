//! Material signatures: which pieces sit on each side of a table.

use std::fmt::Display;

use num_bigint::BigUint;
use serde::Serialize;

use crate::combinatorics::{combination_with_repetition, exact_div};
use crate::config::NUM_PIECE_KINDS;
use crate::error::Result;
use crate::piece::PieceKind;

/// How the extra (non-king) pieces divide between the two sides.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct TableSplit {
    pub strong: u32,
    pub weak: u32,
}

impl TableSplit {
    pub fn new(strong: u32, weak: u32) -> Self {
        Self { strong, weak }
    }

    /// Every split of `extra_pieces` where the weaker side keeps at least one
    /// piece, most balanced first. For 5 pieces: 3v2, then 4v1.
    pub fn for_extra_pieces(extra_pieces: u32) -> Vec<TableSplit> {
        (1..=extra_pieces / 2)
            .rev()
            .map(|weak| TableSplit::new(extra_pieces - weak, weak))
            .collect()
    }

    /// Number of distinct tables with this split.
    ///
    /// An even split is colour symmetric (`XvY` is the same table as `YvX`),
    /// so its sides are counted as unordered pairs.
    pub fn table_count(self) -> Result<BigUint> {
        let strong = combination_with_repetition(NUM_PIECE_KINDS, self.strong as i64)?;
        if self.strong == self.weak {
            let pairs = &strong * (strong.clone() + 1u32);
            return Ok(exact_div(&pairs, &BigUint::from(2u32)));
        }
        let weak = combination_with_repetition(NUM_PIECE_KINDS, self.weak as i64)?;
        Ok(strong * weak)
    }
}

impl Display for TableSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.strong, self.weak)
    }
}

/// One concrete table, e.g. `KQRRvKBN`. Pieces are held strongest first.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Material {
    pub strong: Vec<PieceKind>,
    pub weak: Vec<PieceKind>,
}

impl Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("K")?;
        for piece in &self.strong {
            write!(f, "{}", piece)?;
        }
        f.write_str("vK")?;
        for piece in &self.weak {
            write!(f, "{}", piece)?;
        }
        Ok(())
    }
}

fn push_multisets(
    remaining: u32,
    below: usize,
    current: &mut Vec<PieceKind>,
    out: &mut Vec<Vec<PieceKind>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    for i in (0..below).rev() {
        current.push(PieceKind::from(i));
        push_multisets(remaining - 1, i + 1, current, out);
        current.pop();
    }
}

// each multiset listed strongest first
pub fn piece_multisets(size: u32) -> Vec<Vec<PieceKind>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(size as usize);
    push_multisets(size, PieceKind::ALL.len(), &mut current, &mut out);
    out
}

pub fn enumerate_tables(split: TableSplit) -> Vec<Material> {
    let strong_sides = piece_multisets(split.strong);
    let weak_sides = piece_multisets(split.weak);

    let mut tables = Vec::new();
    for (i, strong) in strong_sides.iter().enumerate() {
        // even splits: skip the colour-flipped duplicate
        let first_weak = if split.strong == split.weak { i } else { 0 };
        for weak in &weak_sides[first_weak..] {
            tables.push(Material {
                strong: strong.clone(),
                weak: weak.clone(),
            });
        }
    }
    tables
}
