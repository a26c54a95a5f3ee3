//! Fuzz target: parsing of the `PATCH /powers/{id}` body.

#![no_main]

use heroes_api::request::parse_description_patch;
use heroes_core::MIN_DESCRIPTION_LEN;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    if let Ok(Some(description)) = parse_description_patch(&body) {
        assert!(description.as_str().chars().count() >= MIN_DESCRIPTION_LEN);
        assert!(!description.as_str().contains('\0'));
    }
});
