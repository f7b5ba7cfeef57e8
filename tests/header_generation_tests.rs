use iso4217_gen::codes::ISO4217_NUMERIC;
use iso4217_gen::pack::pack;
use iso4217_gen::{generate, CodeSet, EmissionConfig};
use std::fs;

/// Pulls the `0x..,` byte literals back out of emitted header text.
fn parse_table_bytes(text: &str) -> Vec<u8> {
    text.lines()
        .filter(|line| line.trim_start().starts_with("0x"))
        .flat_map(str::split_whitespace)
        .map(|tok| {
            let hex = tok.trim_start_matches("0x").trim_end_matches(',');
            u8::from_str_radix(hex, 16).expect("bad byte literal")
        })
        .collect()
}

/// Test the full currency data set end to end
#[test]
fn test_full_data_set_generation() {
    let set = CodeSet::new(ISO4217_NUMERIC).expect("data set must be valid");
    let table = pack(&set);

    // 999 is the largest assigned code, so the table spans 125 bytes
    assert_eq!(table.len(), 125, "unexpected table size: {}", table.len());
    assert_eq!(table.as_bytes()[0], 0x00, "no codes below 8 are assigned");
    assert_eq!(table.as_bytes()[1], 0x11, "codes 8 (ALL) and 12 (DZD)");

    assert!(table.contains(840), "USD");
    assert!(table.contains(978), "EUR");
    assert!(table.contains(999), "XXX");
    assert!(!table.contains(0));
    assert!(!table.contains(1));
    assert!(!table.contains(1000));
    assert!(!table.contains(-840));

    // Reconstructing the membership set from the bitmap recovers the input
    let recovered: Vec<u16> = (0..=999).filter(|&q| table.contains(i32::from(q))).collect();
    assert_eq!(recovered, ISO4217_NUMERIC);
}

/// Test: emitted text embeds exactly the packed bytes
#[test]
fn test_emitted_text_matches_table() {
    let set = CodeSet::new(ISO4217_NUMERIC).unwrap();
    let table = pack(&set);
    let text = generate(ISO4217_NUMERIC, &EmissionConfig::default()).unwrap();

    assert_eq!(parse_table_bytes(&text), table.as_bytes());
}

/// Test: cosmetic toggles never change the table bytes
#[test]
fn test_config_is_cosmetic_only() {
    let full = generate(ISO4217_NUMERIC, &EmissionConfig::default()).unwrap();
    let bare = generate(
        ISO4217_NUMERIC,
        &EmissionConfig {
            emit_copyright: false,
            emit_header_guard: false,
            indent: "\t".to_string(),
        },
    )
    .unwrap();

    assert_ne!(full, bare);
    assert_eq!(parse_table_bytes(&full), parse_table_bytes(&bare));
}

/// Test: identical inputs give byte-identical output
#[test]
fn test_generation_is_deterministic() {
    let config = EmissionConfig::default();
    let first = generate(ISO4217_NUMERIC, &config).unwrap();
    let second = generate(ISO4217_NUMERIC, &config).unwrap();
    assert_eq!(first, second);
}

/// Test: degenerate empty domain still yields a usable header
#[test]
fn test_empty_domain_header() {
    let text = generate(&[], &EmissionConfig::default()).unwrap();
    assert_eq!(parse_table_bytes(&text), vec![0x00]);
    assert!(text.contains("codes[1]"));
}

/// Test writing the generated header to a scratch file
#[test]
fn test_write_header_to_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("iso4217.h");

    let text = generate(ISO4217_NUMERIC, &EmissionConfig::default()).unwrap();
    fs::write(&path, &text).expect("Failed to write header");

    let read_back = fs::read_to_string(&path).expect("Failed to read header");
    assert_eq!(read_back, text);
    assert!(read_back.ends_with("#endif /* Z_ISO4217_H */\n"));
}
