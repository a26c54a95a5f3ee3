//! Table definitions, applied idempotently on connect.
//!
//! The `CHECK` clauses repeat the domain validation so a write that bypasses
//! it still cannot persist an invalid description or strength.

pub(crate) const STATEMENTS: [&str; 3] = [
    r"
    CREATE TABLE IF NOT EXISTS heroes (
        id          INTEGER PRIMARY KEY,
        name        TEXT NOT NULL,
        super_name  TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS powers (
        id          INTEGER PRIMARY KEY,
        name        TEXT NOT NULL,
        description TEXT NOT NULL CHECK (length(description) >= 20)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS hero_powers (
        id          INTEGER PRIMARY KEY,
        strength    TEXT NOT NULL CHECK (strength IN ('Strong', 'Weak', 'Average')),
        hero_id     INTEGER NOT NULL,
        power_id    INTEGER NOT NULL,
        CONSTRAINT fk_hero_powers_hero_id_heroes
            FOREIGN KEY (hero_id) REFERENCES heroes (id) ON DELETE CASCADE,
        CONSTRAINT fk_hero_powers_power_id_powers
            FOREIGN KEY (power_id) REFERENCES powers (id) ON DELETE CASCADE
    )
    ",
];
