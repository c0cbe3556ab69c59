#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use wave2c_core::{parse_wave, render_c_array, CArrayOptions};

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    if let Ok(parsed) = parse_wave(&mut cursor) {
        // Accepted input always has the canonical header in front of it
        assert!(data.len() >= 44 + parsed.samples.len());
        let _ = render_c_array(parsed.samples.as_bytes(), &CArrayOptions::default(), None);
    }
});
