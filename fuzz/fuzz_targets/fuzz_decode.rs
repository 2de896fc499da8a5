#![no_main]

use libfuzzer_sys::fuzz_target;

use smdcode_core::{decode, format_ohms_default};

fuzz_target!(|data: &[u8]| {
    let Ok(code) = std::str::from_utf8(data) else {
        return;
    };

    // Should not panic on any input; a successful decode must also
    // produce a finite, non-negative resistance that formats cleanly.
    if let Ok(result) = decode(code) {
        assert!(result.ohms.is_finite());
        assert!(result.ohms >= 0.0);
        let _ = format_ohms_default(result.ohms);
    }
});
