#![no_main]

use libfuzzer_sys::fuzz_target;

use smdcode_core::format_ohms;

fuzz_target!(|input: (f64, u8)| {
    let (ohms, precision) = input;
    // Precision is kept small; the formatter should never panic for
    // any float, only return an error for negatives and NaN.
    let precision = usize::from(precision % 16) + 1;
    if let Ok(text) = format_ohms(ohms, precision) {
        assert!(!text.is_empty());
        assert!(text.ends_with('Ω'));
    }
});
