use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Patient Intake";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listening port when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 5000;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "patients.db";

/// Runtime configuration, resolved once at startup and passed to the
/// server — no global state.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// `PORT` selects the listening port (default 5000); `INTAKE_DB`
    /// selects the SQLite file (default `patients.db`).
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("INTAKE_DB").ok(),
        )
    }

    /// Factored out from `from_env` so tests can exercise the parsing
    /// without touching the process environment.
    pub fn from_vars(port: Option<String>, db_path: Option<String>) -> Self {
        let port = port
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let db_path = db_path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
        Self { port, db_path }
    }
}

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_vars(None, None);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.db_path, PathBuf::from("patients.db"));
    }

    #[test]
    fn port_parsed_from_var() {
        let cfg = Config::from_vars(Some("8080".into()), None);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let cfg = Config::from_vars(Some("not-a-port".into()), None);
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn db_path_from_var() {
        let cfg = Config::from_vars(None, Some("/tmp/intake-test.db".into()));
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/intake-test.db"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
