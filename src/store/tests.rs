use std::{env, process};

use crate::{compressor::HuffmanCompressor, decoder::decode};

use super::*;

fn test_basename(name: &str) -> String {
    let dir = env::temp_dir().join(format!("huffman_compressor_store_{}", process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name).to_string_lossy().into_owned()
}

fn cleanup(basename: &str) {
    for ext in [PAYLOAD_EXTENSION, CODEBOOK_EXTENSION, PROPERTIES_EXTENSION, REPORT_EXTENSION] {
        let _ = fs::remove_file(file_name(basename, ext));
    }
}

fn store_and_restore<S: Symbol>(input: &[S], config: &Properties, name: &str) -> Vec<S> {
    let basename = test_basename(name);

    let mut compressor = HuffmanCompressor::new(input).unwrap();
    let compressed = compressor.compress(input, config.bits_per_symbol).unwrap();
    let written = store(&basename, compressor.codebook(), &compressed, config).unwrap();

    let props = load_properties(&basename).unwrap();
    assert_eq!(props, written);

    let codebook: Codebook<S> = load_codebook(&basename, &props).unwrap();
    assert_eq!(&codebook, compressor.codebook());

    let payload = load_payload(&basename, &props).unwrap();
    let restored = decode(&codebook, &payload, props.bits as usize).unwrap();

    cleanup(&basename);
    restored
}

#[test]
fn test_packed_json_roundtrip() {
    let input: Vec<char> = "Für Elise\nla la la\n".chars().collect();
    let restored = store_and_restore(input.as_slice(), &Properties::default(), "packed_json");

    assert_eq!(restored, input);
}

#[test]
fn test_ascii_bincode_roundtrip() {
    let config = Properties {
        unit: SymbolUnit::Byte,
        payload_format: PayloadFormat::Ascii,
        codebook_format: CodebookFormat::Bincode,
        ..Default::default()
    };
    let input = vec![0u8, 255, 10, 13, 10, 0, 0, 7];
    let restored = store_and_restore(input.as_slice(), &config, "ascii_bincode");

    assert_eq!(restored, input);
}

#[test]
fn test_written_files() {
    let basename = test_basename("written_files");
    let input = b"aaab";

    let mut compressor = HuffmanCompressor::new(input.as_slice()).unwrap();
    let compressed = compressor.compress(input, 8).unwrap();
    let config = Properties { payload_format: PayloadFormat::Ascii, ..Default::default() };
    let props = store(&basename, compressor.codebook(), &compressed, &config).unwrap();

    assert_eq!(props.unit, SymbolUnit::Byte);
    assert_eq!(props.symbols, 4);
    assert_eq!(props.distinct_symbols, 2);
    assert_eq!(props.bits, 4);
    assert_eq!(props.pad_bits, 4);
    assert_eq!(props.savings, 28);

    assert_eq!(fs::read_to_string(file_name(&basename, PAYLOAD_EXTENSION)).unwrap(), "1110");
    assert_eq!(fs::read_to_string(file_name(&basename, REPORT_EXTENSION)).unwrap(), "Total Savings: 28\na: 3: 1\nb: 1: 0\n");

    cleanup(&basename);
}

#[test]
fn test_codebook_unit_mismatch() {
    let codebook = HuffmanCompressor::new(b"abc".as_slice()).unwrap().codebook().clone();
    let serialized = SerializedCodebook::from_codebook(&codebook);

    assert!(matches!(serialized.into_codebook::<char>(), Err(Error::MalformedInput(_))));
}

#[test]
fn test_corrupt_codebook_is_malformed() {
    let serialized = SerializedCodebook {
        unit: SymbolUnit::Codepoint,
        entries: vec![
            SerializedEntry { symbol: 'a' as u32, code: "0".parse().unwrap() },
            SerializedEntry { symbol: 'b' as u32, code: "00".parse().unwrap() },
        ],
    };

    let err = serialized.into_codebook::<char>().unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_codebook_json_layout() {
    let codebook = HuffmanCompressor::new(b"aab".as_slice()).unwrap().codebook().clone();
    let serialized = SerializedCodebook::from_codebook(&codebook);
    let bytes = serialized.to_bytes(CodebookFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["unit"], "Byte");
    assert_eq!(value["entries"][0]["symbol"], 97);
    assert_eq!(value["entries"][0]["code"], "1");
    assert_eq!(SerializedCodebook::from_bytes(&bytes, CodebookFormat::Json).unwrap(), serialized);
}

#[test]
fn test_short_payload_is_rejected() {
    let basename = test_basename("short_payload");
    fs::write(file_name(&basename, PAYLOAD_EXTENSION), [0u8]).unwrap();
    let props = Properties { bits: 9, pad_bits: 7, ..Default::default() };

    assert!(matches!(load_payload(&basename, &props), Err(Error::MalformedInput(_))));

    let props = Properties { bits: 2, pad_bits: 6, payload_format: PayloadFormat::Ascii, ..Default::default() };
    assert!(matches!(load_payload(&basename, &props), Err(Error::MalformedInput(_))));

    cleanup(&basename);
}

#[test]
fn test_pad_bits_must_match_bit_length() {
    let basename = test_basename("pad_mismatch");
    fs::write(file_name(&basename, PAYLOAD_EXTENSION), [0b1110_0000u8]).unwrap();

    let props = Properties { bits: 4, pad_bits: 4, ..Default::default() };
    assert_eq!(&*load_payload(&basename, &props).unwrap(), &[0b1110_0000]);

    let props = Properties { bits: 4, pad_bits: 3, ..Default::default() };
    let err = load_payload(&basename, &props).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
    assert_eq!(err.exit_code(), 2);

    let props = Properties { bits: 8, pad_bits: 1, ..Default::default() };
    assert!(matches!(load_payload(&basename, &props), Err(Error::MalformedInput(_))));

    cleanup(&basename);
}
