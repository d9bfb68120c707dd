#![no_main]

use apicase::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = toml::from_str::<ConfigFile>(input);
    }
});
