use crate::{codebook::Code, encoder::encode, frequency::FrequencyTable, huffman_tree::HuffmanTree};

use super::*;

fn codebook_of<S: Symbol>(input: &[S]) -> Codebook<S> {
    let tree = HuffmanTree::build(&FrequencyTable::tabulate(input)).unwrap();
    Codebook::from_tree(&tree).unwrap()
}

#[test]
fn test_roundtrip_bytes() {
    let input = b"the quick brown fox jumps over the lazy dog";
    let codebook = codebook_of(input);
    let encoded = encode(&codebook, input).unwrap();

    let decoded = decode(&codebook, encoded.as_bytes(), encoded.bit_len()).unwrap();
    assert_eq!(decoded, input.to_vec());
}

#[test]
fn test_roundtrip_codepoints() {
    let input: Vec<char> = "naïve café — déjà vu\r\n\tend".chars().collect();
    let codebook = codebook_of(input.as_slice());
    let encoded = encode(&codebook, &input).unwrap();

    let decoded = decode(&codebook, encoded.as_bytes(), encoded.bit_len()).unwrap();
    assert_eq!(decoded, input);
}

#[test]
fn test_roundtrip_single_symbol() {
    let codebook = codebook_of(b"zzzzzzzzz");
    let encoded = encode(&codebook, b"zzzzzzzzz").unwrap();

    let decoded = decode(&codebook, encoded.as_bytes(), encoded.bit_len()).unwrap();
    assert_eq!(decoded, b"zzzzzzzzz".to_vec());
}

#[test]
fn test_padding_is_ignored() {
    let codebook = codebook_of(b"aaab");
    let encoded = encode(&codebook, b"ab").unwrap();

    assert_eq!(encoded.pad_bits(), 6);
    assert_eq!(decode(&codebook, encoded.as_bytes(), encoded.bit_len()).unwrap(), b"ab".to_vec());
}

#[test]
fn test_truncated_payload() {
    let codebook = codebook_of(b"abcd");
    let encoded = encode(&codebook, b"abcd").unwrap();

    let err = decode(&codebook, encoded.as_bytes(), encoded.bit_len() - 1).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));

    let err = decode(&codebook, encoded.as_bytes(), 64).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn test_dead_end_path() {
    let codebook = Codebook::from_entries(vec![(b'a', "0".parse::<Code>().unwrap()), (b'b', "10".parse().unwrap())]).unwrap();

    // "11" leads nowhere in this incomplete code
    let err = decode(&codebook, &[0b1100_0000], 2).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn test_read_next_one_at_a_time() {
    let codebook = codebook_of(b"aab");
    let encoded = encode(&codebook, b"aba").unwrap();
    let decoder = HuffmanDecoder::new(&codebook).unwrap();
    let mut reader = BinaryReader::new(encoded.as_bytes().into(), encoded.bit_len());

    assert_eq!(decoder.read_next(&mut reader).unwrap(), Some(b'a'));
    assert_eq!(decoder.read_next(&mut reader).unwrap(), Some(b'b'));
    assert_eq!(decoder.read_next(&mut reader).unwrap(), Some(b'a'));
    assert_eq!(decoder.read_next(&mut reader).unwrap(), None);
}
