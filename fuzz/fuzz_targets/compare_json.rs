#![no_main]

use apicase::compare::{first_difference, parse_body, structurally_equal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (left, right) = input.split_once('\u{0}').unwrap_or((input, input));
    let (Ok(expected), Ok(actual)) = (parse_body(left), parse_body(right)) else {
        return;
    };
    debug_assert!(structurally_equal(&expected, &expected));
    let equal = structurally_equal(&expected, &actual);
    debug_assert_eq!(equal, structurally_equal(&actual, &expected));
    debug_assert_eq!(equal, first_difference(&expected, &actual).is_none());
});
