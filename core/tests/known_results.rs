use num_bigint::BigUint;
use tablebase_estimate_core::{
    combination, combination_with_repetition, factorial, Estimate, Report, DEFAULT_EXTRA_PIECES,
    LOMONOSOV_BYTES,
};

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

#[test]
fn factorials() {
    assert_eq!(factorial(0).unwrap(), big(1));
    assert_eq!(factorial(5).unwrap(), big(120));
    assert_eq!(factorial(10).unwrap(), big(3_628_800));
}

#[test]
fn piece_selections() {
    for (r, plain, expected) in [(3, 7, 35), (2, 6, 15), (4, 8, 70), (1, 5, 5)] {
        assert_eq!(combination_with_repetition(5, r).unwrap(), big(expected));
        assert_eq!(combination(plain, r).unwrap(), big(expected));
    }
}

#[test]
fn lomonosov_end_to_end() {
    let estimate = Estimate::lomonosov().unwrap();
    let c1 = &estimate.splits[0].tables;
    let c2 = &estimate.splits[1].tables;
    assert_eq!(*c1, big(35 * 15));
    assert_eq!(*c2, big(70 * 5));
    assert_eq!(estimate.tables, big(875));
    assert_eq!(
        estimate.bytes_per_table,
        Some(big(LOMONOSOV_BYTES / 875))
    );
    assert_eq!(
        estimate.board_positions,
        big(64).pow(2) * big(65).pow(5)
    );
    assert_eq!(estimate.total_bytes, &estimate.board_positions * big(875));
}

#[test]
fn general_estimate_reproduces_lomonosov() {
    let general = Estimate::new(DEFAULT_EXTRA_PIECES, big(LOMONOSOV_BYTES)).unwrap();
    let mut from_general = Vec::new();
    Report::new(&general).write_text(&mut from_general).unwrap();

    let mut from_fixed = Vec::new();
    Report::new(&Estimate::lomonosov().unwrap())
        .write_text(&mut from_fixed)
        .unwrap();

    assert_eq!(from_general, from_fixed);
}

#[test]
fn estimate_serializes_big_numbers_as_strings() {
    let estimate = Estimate::lomonosov().unwrap();
    let json = serde_json::to_value(&estimate).unwrap();
    assert_eq!(json["tables"], "875");
    assert_eq!(json["bytes_per_table"], "160000000000");
    assert_eq!(json["total_bytes"], "4158481600000000");
    assert_eq!(json["splits"][0]["split"]["strong"], 3);
    assert_eq!(json["splits"][0]["tables"], "525");
    assert_eq!(json["extra_pieces"], 5);
}
