// consts: do not change
pub const NUM_PIECE_KINDS: i64 = 5;
pub const KING_SQUARES: u32 = 64;
// 64 board squares plus the slot for a captured piece
pub const OTHER_SQUARES: u32 = 65;

// Lomonosov 7-piece tablebases: 140 TB over 525 tables of 4v3 and 350 of 5v2
pub const LOMONOSOV_BYTES: u64 = 140_000_000_000_000;
pub const LOMONOSOV_HEADLINE: &str = "Lomonosov Endgame Tablebases use 140 terrabytes";
pub const BUDGET_HEADLINE: &str = "Byte budget is";
pub const LOMONOSOV_COMPARISON: &str = "which is 160 billion, compared to my 4.158 trillion";

// may be changed
pub const DEFAULT_EXTRA_PIECES: u32 = 5;
