use super::*;

fn textbook_table() -> FrequencyTable<char> {
    FrequencyTable::from_counts(vec![('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)]).unwrap()
}

#[test]
fn test_empty_table_is_rejected() {
    let table = FrequencyTable::<u8>::new();

    assert!(matches!(HuffmanTree::build(&table), Err(Error::EmptyInput)));
}

#[test]
fn test_single_symbol_is_a_lone_leaf() {
    let table = FrequencyTable::tabulate(b"aaaa");
    let tree = HuffmanTree::build(&table).unwrap();

    assert_eq!(tree.root, HuffNode::leaf(b'a', 4));
    assert_eq!(tree.leaf_count(), 1);
}

#[test]
fn test_root_weight_is_input_length() {
    let table = textbook_table();
    let tree = HuffmanTree::build(&table).unwrap();

    assert_eq!(tree.weight(), 100);
    assert_eq!(tree.leaf_count(), 6);
    assert!(tree.validate(&table).is_ok());
}

#[test]
fn test_textbook_shape() {
    let tree = HuffmanTree::build(&textbook_table()).unwrap();

    // f (45) is lighter than the 55 subtree, so it is extracted first and goes left
    match &tree.root {
        HuffNode::Internal { left, right, .. } => {
            assert_eq!(**left, HuffNode::leaf('f', 45));
            assert_eq!(right.weight(), 55);
        },
        _ => panic!("Expected an internal root"),
    }
    assert_eq!(tree.root.height(), 4);
}

#[test]
fn test_two_symbols_lighter_goes_left() {
    let tree = HuffmanTree::build(&FrequencyTable::tabulate(b"aaab")).unwrap();

    assert_eq!(tree.root, HuffNode::merge(HuffNode::leaf(b'b', 1), HuffNode::leaf(b'a', 3)));
}

#[test]
fn test_equal_weights_follow_symbol_order() {
    let tree = HuffmanTree::build(&FrequencyTable::tabulate(b"abcd")).unwrap();

    let expected = HuffNode::merge(
        HuffNode::merge(HuffNode::leaf(b'a', 1), HuffNode::leaf(b'b', 1)),
        HuffNode::merge(HuffNode::leaf(b'c', 1), HuffNode::leaf(b'd', 1)),
    );
    assert_eq!(tree.root, expected);
}

#[test]
fn test_validate_detects_a_foreign_tree() {
    let tree = HuffmanTree::build(&FrequencyTable::tabulate(b"aab")).unwrap();
    let other = FrequencyTable::tabulate(b"abb");

    assert!(matches!(tree.validate(&other), Err(Error::InvariantViolation(_))));
}

#[test]
fn test_validate_detects_bad_internal_weight() {
    let table = FrequencyTable::tabulate(b"ab");
    let tree = HuffmanTree {
        root: HuffNode::Internal {
            weight: 7,
            left: Box::new(HuffNode::leaf(b'a', 1)),
            right: Box::new(HuffNode::leaf(b'b', 1)),
        },
    };

    assert!(matches!(tree.validate(&table), Err(Error::InvariantViolation(_))));
}

#[test]
fn test_render_structure() {
    let tree = HuffmanTree::build(&FrequencyTable::tabulate(b"aab")).unwrap();

    assert_eq!(
        tree.render_structure(),
        "root -> internal [weight: 3]\n  0 -> leaf b [weight: 1]\n  1 -> leaf a [weight: 2]\n"
    );
}

#[test]
fn test_maximal_total_weight_builds() {
    let table = FrequencyTable::from_counts([(b'a', u64::MAX - 2), (b'b', 1), (b'c', 1)]).unwrap();
    let tree = HuffmanTree::build(&table).unwrap();

    assert_eq!(tree.weight(), u64::MAX);
    assert_eq!(tree.leaf_count(), 3);
}
