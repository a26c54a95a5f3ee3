//! Integration test: deleting a hero or a power removes its associations.
//!
//! Runs against a fresh in-memory SQLite database per test.

use heroes_core::{Description, NewHero, NewHeroPower, NewPower, Strength};
use heroes_store::{seed, HeroStore, SqliteStore, StoreConfig};

async fn seeded_store() -> SqliteStore {
    let store = SqliteStore::connect(&StoreConfig::in_memory())
        .await
        .expect("in-memory store opens");
    seed(&store).await.expect("seed succeeds");
    store
}

async fn orphan_count(store: &SqliteStore) -> i64 {
    sqlx::query_scalar(
        r"
        SELECT COUNT(*) FROM hero_powers hp
        WHERE NOT EXISTS (SELECT 1 FROM heroes h WHERE h.id = hp.hero_id)
           OR NOT EXISTS (SELECT 1 FROM powers p WHERE p.id = hp.power_id)
        ",
    )
    .fetch_one(store.pool())
    .await
    .expect("orphan query")
}

#[tokio::test]
async fn seed_populates_every_table_once() {
    let store = seeded_store().await;
    assert_eq!(store.list_heroes().await.expect("heroes").len(), 10);
    assert_eq!(store.list_powers().await.expect("powers").len(), 4);

    let again = seed(&store).await.expect("second seed");
    assert_eq!(again.heroes, 0, "seeding a populated store must be a no-op");
    assert_eq!(store.list_heroes().await.expect("heroes").len(), 10);
}

#[tokio::test]
async fn deleting_hero_removes_its_hero_powers() {
    let store = seeded_store().await;
    let hero = store.list_heroes().await.expect("heroes")[0].clone();
    assert!(!store.hero_powers_for_hero(hero.id).await.expect("links").is_empty());

    assert!(store.delete_hero(hero.id).await.expect("delete"));
    assert!(store.hero_powers_for_hero(hero.id).await.expect("links").is_empty());
    assert_eq!(orphan_count(&store).await, 0);
    assert!(!store.delete_hero(hero.id).await.expect("second delete"));
}

#[tokio::test]
async fn deleting_power_removes_its_hero_powers() {
    let store = SqliteStore::connect(&StoreConfig::in_memory())
        .await
        .expect("in-memory store opens");
    let hero = store.insert_hero(NewHero::new("Kamala Khan", "Ms. Marvel")).await.expect("hero");
    let description = Description::new("gives the wielder super-human strengths").expect("valid");
    let power = store.insert_power(NewPower::new("super strength", description)).await.expect("power");
    store
        .create_hero_power(NewHeroPower::new(Strength::Strong, hero.id, power.id))
        .await
        .expect("link");

    assert!(store.delete_power(power.id).await.expect("delete"));
    assert!(store.hero_powers_for_hero(hero.id).await.expect("links").is_empty());
    assert_eq!(orphan_count(&store).await, 0);
    assert!(store.find_hero(hero.id).await.expect("find").is_some(), "hero must survive");
}

#[tokio::test]
async fn deleting_every_parent_leaves_no_orphans() {
    let store = seeded_store().await;
    for power in store.list_powers().await.expect("powers") {
        store.delete_power(power.id).await.expect("delete power");
        assert_eq!(orphan_count(&store).await, 0);
    }
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hero_powers")
        .fetch_one(store.pool())
        .await
        .expect("count");
    assert_eq!(total, 0);
}
