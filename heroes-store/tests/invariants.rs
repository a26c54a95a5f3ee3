//! Property tests: the schema upholds the field invariants even for writes
//! that skip domain validation.

use heroes_core::{Description, NewHero, NewPower, MIN_DESCRIPTION_LEN};
use heroes_store::{HeroStore, SqliteStore, StoreConfig, StoreError};
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime builds")
}

const INITIAL: &str = "gives the wielder super-human strengths";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn raw_description_updates_respect_minimum_length(value in "\\PC{0,30}") {
        let (outcome, stored) = runtime().block_on(async {
            let store = SqliteStore::connect(&StoreConfig::in_memory()).await.expect("store");
            let power = store
                .insert_power(NewPower::new("strength", Description::new(INITIAL).expect("valid")))
                .await
                .expect("insert power");
            let outcome = sqlx::query("UPDATE powers SET description = ? WHERE id = ?")
                .bind(&value)
                .bind(power.id.get())
                .execute(store.pool())
                .await
                .map_err(StoreError::from);
            let stored = store.find_power(power.id).await.expect("find").expect("exists");
            (outcome, stored.description.as_str().to_owned())
        });

        if value.chars().count() >= MIN_DESCRIPTION_LEN {
            prop_assert!(outcome.is_ok());
            prop_assert_eq!(stored, value);
        } else {
            prop_assert!(matches!(outcome, Err(StoreError::Constraint(_))));
            prop_assert_eq!(stored, INITIAL);
        }
    }

    #[test]
    fn raw_strength_inserts_outside_enum_are_rejected(value in "[A-Za-z]{0,8}") {
        let (outcome, count) = runtime().block_on(async {
            let store = SqliteStore::connect(&StoreConfig::in_memory()).await.expect("store");
            let hero = store.insert_hero(NewHero::new("Kamala Khan", "Ms. Marvel")).await.expect("hero");
            let power = store
                .insert_power(NewPower::new("strength", Description::new(INITIAL).expect("valid")))
                .await
                .expect("power");
            let outcome = sqlx::query(
                "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?)",
            )
            .bind(&value)
            .bind(hero.id.get())
            .bind(power.id.get())
            .execute(store.pool())
            .await
            .map_err(StoreError::from);
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hero_powers")
                .fetch_one(store.pool())
                .await
                .expect("count");
            (outcome.is_ok(), count)
        });

        let valid = matches!(value.as_str(), "Strong" | "Weak" | "Average");
        prop_assert_eq!(outcome, valid);
        prop_assert_eq!(count, i64::from(valid));
    }
}
