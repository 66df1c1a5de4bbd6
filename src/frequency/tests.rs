use super::*;

#[test]
fn test_tabulate_counts_every_symbol() {
    let input: Vec<char> = "abracadabra".chars().collect();
    let table = FrequencyTable::tabulate(input.as_slice());

    assert_eq!(table.len(), 5);
    assert_eq!(table.total(), 11);
    assert_eq!(table.get(&'a'), Some(5));
    assert_eq!(table.get(&'b'), Some(2));
    assert_eq!(table.get(&'r'), Some(2));
    assert_eq!(table.get(&'c'), Some(1));
    assert_eq!(table.get(&'d'), Some(1));
    assert_eq!(table.get(&'z'), None);
}

#[test]
fn test_tabulate_empty_input() {
    let table = FrequencyTable::<u8>::tabulate(&[]);

    assert!(table.is_empty());
    assert_eq!(table.total(), 0);
}

#[test]
fn test_no_case_folding() {
    let input: Vec<char> = "aAaA".chars().collect();
    let table = FrequencyTable::tabulate(input.as_slice());

    assert_eq!(table.get(&'a'), Some(2));
    assert_eq!(table.get(&'A'), Some(2));
}

#[test]
fn test_iteration_is_in_symbol_order() {
    let table = FrequencyTable::tabulate(b"zyxzy");
    let symbols: Vec<_> = table.iter().collect();

    assert_eq!(symbols, vec![(b'x', 1), (b'y', 2), (b'z', 2)]);
}

#[test]
fn test_from_counts_drops_zero_and_merges() {
    let table = FrequencyTable::from_counts(vec![('a', 3), ('b', 0), ('a', 2), ('c', 1)]).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&'a'), Some(5));
    assert_eq!(table.get(&'b'), None);
    assert_eq!(table.total(), 6);
}

#[test]
fn test_from_counts_rejects_overflowing_total() {
    let err = FrequencyTable::from_counts([(1u8, u64::MAX), (2u8, 1)]).unwrap_err();

    assert!(matches!(err, Error::InvariantViolation(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_from_counts_accepts_maximal_total() {
    let table = FrequencyTable::from_counts([(1u8, u64::MAX - 1), (2u8, 1)]).unwrap();

    assert_eq!(table.total(), u64::MAX);
    assert_eq!(table.get(&1), Some(u64::MAX - 1));
}
