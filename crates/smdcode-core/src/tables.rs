//! Static lookup tables for the EIA-96 marking scheme.

/// EIA-96 base significands for codes 01..96 (standard E96 series).
///
/// The two-digit part of an EIA-96 code is a 1-based index into this
/// table; entry values span 100..=976 and encode three significant
/// figures of the resistance.
pub const EIA96_BASES: [u32; 96] = [
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130, //
    133, 137, 140, 143, 147, 150, 154, 158, 162, 165, 169, 174, //
    178, 182, 187, 191, 196, 200, 205, 210, 215, 221, 226, 232, //
    237, 243, 249, 255, 261, 267, 274, 280, 287, 294, 301, 309, //
    316, 324, 332, 340, 348, 357, 365, 374, 383, 392, 402, 412, //
    422, 432, 442, 453, 464, 475, 487, 499, 511, 523, 536, 549, //
    562, 576, 590, 604, 619, 634, 649, 665, 681, 698, 715, 732, //
    750, 768, 787, 806, 825, 845, 866, 887, 909, 931, 953, 976,
];

/// Look up the power-of-ten multiplier for an EIA-96 letter.
///
/// Returns `None` for letters outside the marking convention. Several
/// letters are deliberate aliases (`R`/`Y`, `S`/`X`, `H`/`B`): vendors
/// disagree on which letter to print, so both spellings must decode.
#[must_use]
pub fn eia96_multiplier(letter: char) -> Option<f64> {
    match letter {
        'Z' => Some(1e-3),
        'Y' | 'R' => Some(1e-2),
        'X' | 'S' => Some(1e-1),
        'A' => Some(1.0),
        'B' | 'H' => Some(10.0),
        'C' => Some(100.0),
        'D' => Some(1_000.0),
        'E' => Some(10_000.0),
        'F' => Some(100_000.0),
        _ => None,
    }
}
