//! Fuzz target: field validation on arbitrary UTF-8.
//!
//! Neither validator may panic, and each must agree with its definition.

#![no_main]

use heroes_core::{validate_description, validate_strength, MIN_DESCRIPTION_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    assert_eq!(
        validate_description(text).is_ok(),
        !text.contains('\0') && text.chars().count() >= MIN_DESCRIPTION_LEN
    );
    assert_eq!(
        validate_strength(text).is_ok(),
        matches!(text, "Strong" | "Weak" | "Average")
    );
});
