//! Fuzz target: parsing of the `POST /hero_powers` body.
//!
//! Arbitrary bytes that happen to be JSON are run through the body parser.
//! Errors are expected; panics are not, and a successful parse must carry
//! one of the accepted strengths.

#![no_main]

use heroes_api::request::parse_create_hero_power;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    if let Ok(link) = parse_create_hero_power(&body) {
        assert!(matches!(link.strength.as_str(), "Strong" | "Weak" | "Average"));
        assert_eq!(body["hero_id"].as_i64(), Some(link.hero_id.get()));
        assert_eq!(body["power_id"].as_i64(), Some(link.power_id.get()));
    }
});
