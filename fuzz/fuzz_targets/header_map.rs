#![no_main]

use apicase::http::parse_header_map;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(headers) = parse_header_map(input) {
            debug_assert!(!input.trim().is_empty() || headers.is_empty());
        }
    }
});
