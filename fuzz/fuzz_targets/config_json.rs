#![no_main]

use apicase::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<ConfigFile>(data);
});
