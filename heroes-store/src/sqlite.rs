//! SQLite implementation of [`HeroStore`].

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use heroes_core::{
    Description, Hero, HeroId, HeroPower, HeroPowerId, HeroPowerView, NewHero, NewHeroPower,
    NewPower, Power, PowerId, Strength,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Executor, Sqlite};
use tracing::{debug, info};

use crate::{schema, HeroStore, StoreConfig, StoreError};

/// How long a connection waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Transactions that read before they write take the write lock up front.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// A [`HeroStore`] backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database named by `config` and apply
    /// the schema.
    ///
    /// Foreign-key enforcement is switched on for every connection, which is
    /// what makes hero and power deletes cascade.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the connection string is invalid,
    /// the database cannot be opened, or the schema cannot be applied.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);

        // Every connection to `:memory:` opens a separate database, so an
        // in-memory store is pinned to exactly one connection that never expires.
        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        for statement in schema::STATEMENTS {
            sqlx::query(statement).execute(&pool).await?;
        }
        info!(url = %config.database_url, "store connected");
        Ok(Self { pool })
    }

    /// Wrap an existing pool. The schema is assumed to be in place.
    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ── Row mapping ───────────────────────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
struct HeroRow {
    id: i64,
    name: String,
    super_name: String,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Hero::new(HeroId(row.id), row.name, row.super_name)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PowerRow {
    id: i64,
    name: String,
    description: String,
}

impl TryFrom<PowerRow> for Power {
    type Error = StoreError;

    fn try_from(row: PowerRow) -> Result<Self, Self::Error> {
        let description = Description::new(row.description).map_err(|e| StoreError::Corrupt {
            table: "powers",
            id: row.id,
            reason: e.to_string(),
        })?;
        Ok(Power::new(PowerId(row.id), row.name, description))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HeroPowerJoinRow {
    id: i64,
    strength: String,
    hero_id: i64,
    power_id: i64,
    hero_name: String,
    hero_super_name: String,
    power_name: String,
    power_description: String,
}

impl TryFrom<HeroPowerJoinRow> for HeroPowerView {
    type Error = StoreError;

    fn try_from(row: HeroPowerJoinRow) -> Result<Self, Self::Error> {
        let strength = parse_strength(row.id, &row.strength)?;
        let link = HeroPower::new(
            HeroPowerId(row.id),
            strength,
            HeroId(row.hero_id),
            PowerId(row.power_id),
        );
        let hero = Hero::new(HeroId(row.hero_id), row.hero_name, row.hero_super_name);
        let power = Power::try_from(PowerRow {
            id: row.power_id,
            name: row.power_name,
            description: row.power_description,
        })?;
        Ok(HeroPowerView::new(link, hero, power))
    }
}

fn parse_strength(id: i64, value: &str) -> Result<Strength, StoreError> {
    value.parse().map_err(|e: heroes_core::CoreError| StoreError::Corrupt {
        table: "hero_powers",
        id,
        reason: e.to_string(),
    })
}

// ── Queries shared by pool and transaction paths ──────────────────────────────

async fn fetch_hero<'e, E>(executor: E, id: HeroId) -> Result<Option<Hero>, StoreError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, HeroRow>("SELECT id, name, super_name FROM heroes WHERE id = ?")
        .bind(id.get())
        .fetch_optional(executor)
        .await?;
    Ok(row.map(Hero::from))
}

async fn fetch_power<'e, E>(executor: E, id: PowerId) -> Result<Option<Power>, StoreError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, PowerRow>(
        "SELECT id, name, description FROM powers WHERE id = ?",
    )
    .bind(id.get())
    .fetch_optional(executor)
    .await?;
    row.map(Power::try_from).transpose()
}

#[async_trait]
impl HeroStore for SqliteStore {
    #[tracing::instrument(skip(self))]
    async fn list_heroes(&self) -> Result<Vec<Hero>, StoreError> {
        let rows = sqlx::query_as::<_, HeroRow>(
            "SELECT id, name, super_name FROM heroes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Hero::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn find_hero(&self, id: HeroId) -> Result<Option<Hero>, StoreError> {
        fetch_hero(&self.pool, id).await
    }

    #[tracing::instrument(skip(self))]
    async fn insert_hero(&self, hero: NewHero) -> Result<Hero, StoreError> {
        let result = sqlx::query("INSERT INTO heroes (name, super_name) VALUES (?, ?)")
            .bind(&hero.name)
            .bind(&hero.super_name)
            .execute(&self.pool)
            .await?;
        let id = HeroId(result.last_insert_rowid());
        debug!(%id, "hero inserted");
        Ok(Hero::new(id, hero.name, hero.super_name))
    }

    #[tracing::instrument(skip(self))]
    async fn delete_hero(&self, id: HeroId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn list_powers(&self) -> Result<Vec<Power>, StoreError> {
        let rows = sqlx::query_as::<_, PowerRow>(
            "SELECT id, name, description FROM powers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Power::try_from).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn find_power(&self, id: PowerId) -> Result<Option<Power>, StoreError> {
        fetch_power(&self.pool, id).await
    }

    #[tracing::instrument(skip(self))]
    async fn insert_power(&self, power: NewPower) -> Result<Power, StoreError> {
        let result = sqlx::query("INSERT INTO powers (name, description) VALUES (?, ?)")
            .bind(&power.name)
            .bind(power.description.as_str())
            .execute(&self.pool)
            .await?;
        let id = PowerId(result.last_insert_rowid());
        debug!(%id, "power inserted");
        Ok(Power::new(id, power.name, power.description))
    }

    #[tracing::instrument(skip(self, description))]
    async fn update_power_description(
        &self,
        id: PowerId,
        description: Description,
    ) -> Result<Option<Power>, StoreError> {
        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;
        let result = sqlx::query("UPDATE powers SET description = ? WHERE id = ?")
            .bind(description.as_str())
            .bind(id.get())
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        let power = fetch_power(&mut *tx, id).await?;
        tx.commit().await?;
        debug!(%id, "power description updated");
        Ok(power)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_power(&self, id: PowerId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM powers WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn hero_powers_for_hero(&self, id: HeroId) -> Result<Vec<HeroPowerView>, StoreError> {
        let rows = sqlx::query_as::<_, HeroPowerJoinRow>(
            r"
            SELECT hp.id, hp.strength, hp.hero_id, hp.power_id,
                   h.name AS hero_name, h.super_name AS hero_super_name,
                   p.name AS power_name, p.description AS power_description
            FROM hero_powers hp
            JOIN heroes h ON h.id = hp.hero_id
            JOIN powers p ON p.id = hp.power_id
            WHERE hp.hero_id = ?
            ORDER BY hp.id
            ",
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(HeroPowerView::try_from).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn create_hero_power(&self, link: NewHeroPower) -> Result<HeroPowerView, StoreError> {
        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;

        let hero = fetch_hero(&mut *tx, link.hero_id)
            .await?
            .ok_or(StoreError::HeroNotFound(link.hero_id))?;
        let power = fetch_power(&mut *tx, link.power_id)
            .await?
            .ok_or(StoreError::PowerNotFound(link.power_id))?;

        let result = sqlx::query(
            "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?)",
        )
        .bind(link.strength.as_str())
        .bind(link.hero_id.get())
        .bind(link.power_id.get())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        let id = HeroPowerId(result.last_insert_rowid());
        debug!(%id, hero_id = %link.hero_id, power_id = %link.power_id, "hero power created");
        Ok(HeroPowerView::new(
            HeroPower::new(id, link.strength, link.hero_id, link.power_id),
            hero,
            power,
        ))
    }
}
