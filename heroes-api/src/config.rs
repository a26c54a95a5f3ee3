//! Server configuration read from the environment.

use heroes_store::StoreConfig;

/// Environment variable holding the `host:port` to bind.
pub const LISTEN_ADDR_ENV: &str = "HEROES_LISTEN_ADDR";

/// Environment variable that, when `1` or `true`, seeds an empty database.
pub const SEED_ENV: &str = "HEROES_SEED";

/// Address bound when [`LISTEN_ADDR_ENV`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5555";

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ServerConfig {
    /// `host:port` the listener binds.
    pub listen_addr: String,
    /// Where and how to open the database.
    pub store: StoreConfig,
    /// Seed an empty database with sample data on start.
    pub seed: bool,
}

impl ServerConfig {
    /// Build the configuration from `HEROES_LISTEN_ADDR`, `HEROES_SEED` and
    /// `DB_URI`, applying defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var(LISTEN_ADDR_ENV).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned());
        let seed = std::env::var(SEED_ENV).is_ok_and(|v| parse_flag(&v));
        Self { listen_addr, store: StoreConfig::from_env(), seed }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_truthy_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" true "));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
