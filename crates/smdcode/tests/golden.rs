//! Golden file integration tests.
//!
//! Verifies decode and format results against known values from
//! tests/testdata/smd_golden.json.

use serde::Deserialize;

use smdcode_core::{decode, format_ohms_default};

#[derive(Deserialize)]
struct GoldenData {
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    code: String,
    ohms: f64,
    scheme: String,
    formatted: Option<String>,
}

fn load_golden() -> GoldenData {
    // Try workspace root path first, then crate-local path
    let data = std::fs::read_to_string("../../tests/testdata/smd_golden.json")
        .or_else(|_| std::fs::read_to_string("tests/testdata/smd_golden.json"))
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= b.abs() * 1e-9 + 1e-12
}

#[test]
fn golden_decode_exact() {
    let golden = load_golden();

    for entry in &golden.values {
        let result = decode(&entry.code)
            .unwrap_or_else(|e| panic!("decode({}) failed: {e}", entry.code));
        assert!(
            approx_eq(result.ohms, entry.ohms),
            "{} ohms mismatch: expected {}, got {}",
            entry.code,
            entry.ohms,
            result.ohms
        );
        assert_eq!(
            result.scheme.as_str(),
            entry.scheme,
            "{} scheme mismatch",
            entry.code
        );
    }
}

#[test]
fn golden_format_default_precision() {
    let golden = load_golden();

    for entry in &golden.values {
        if let Some(ref expected) = entry.formatted {
            let result = decode(&entry.code).unwrap();
            let formatted = format_ohms_default(result.ohms).unwrap();
            assert_eq!(&formatted, expected, "{} format mismatch", entry.code);
        }
    }
}

#[test]
fn golden_codes_are_case_insensitive() {
    let golden = load_golden();

    for entry in &golden.values {
        let lower = entry.code.to_lowercase();
        let result = decode(&lower)
            .unwrap_or_else(|e| panic!("decode({lower}) failed: {e}"));
        assert!(
            approx_eq(result.ohms, entry.ohms),
            "{lower} ohms mismatch after case fold"
        );
    }
}
