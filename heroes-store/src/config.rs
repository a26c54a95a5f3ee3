//! Store connection configuration.

/// Environment variable holding the database connection string.
pub const DATABASE_URL_ENV: &str = "DB_URI";

/// Connection string used when [`DATABASE_URL_ENV`] is unset: a SQLite file
/// in the working directory, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";

/// Configuration for opening a [`SqliteStore`](crate::SqliteStore).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct StoreConfig {
    /// SQLite connection string (e.g. `sqlite://app.db`, `sqlite::memory:`).
    pub database_url: String,

    /// Upper bound on pooled connections. In-memory databases always use one.
    pub max_connections: u32,
}

impl StoreConfig {
    /// Create a config for the given connection string with default pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self { database_url: database_url.into(), max_connections: 5 }
    }

    /// Read the connection string from `DB_URI`, falling back to
    /// [`DEFAULT_DATABASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let url = std::env::var(DATABASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        Self::new(url)
    }

    /// A private in-memory database, discarded when the store is dropped.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    /// Returns `true` if the connection string names an in-memory database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}
