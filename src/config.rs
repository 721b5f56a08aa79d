//! Input locations for the report.
//!
//! Paths default to the layout the report has always shipped with and can be
//! redirected through the environment (optionally via a `.env` file) or CLI
//! flags.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DAY_CSV: &str = "./data/day.csv";
pub const DEFAULT_HOUR_CSV: &str = "./data/hour.csv";
pub const DEFAULT_LOGO: &str = "./dashboard/logo.png";

/// Where the daily table, the hourly table and the sidebar logo live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub day_csv: PathBuf,
    pub hour_csv: PathBuf,
    pub logo: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            day_csv: PathBuf::from(DEFAULT_DAY_CSV),
            hour_csv: PathBuf::from(DEFAULT_HOUR_CSV),
            logo: PathBuf::from(DEFAULT_LOGO),
        }
    }
}

impl ReportConfig {
    /// Reads `BIKE_DAY_CSV`, `BIKE_HOUR_CSV` and `BIKE_LOGO`, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |key: &str, fallback: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(fallback)
        };

        Self {
            day_csv: path("BIKE_DAY_CSV", defaults.day_csv),
            hour_csv: path("BIKE_HOUR_CSV", defaults.hour_csv),
            logo: path("BIKE_LOGO", defaults.logo),
        }
    }

    /// Applies explicit overrides (CLI flags) on top of this config.
    pub fn with_overrides(
        mut self,
        day_csv: Option<PathBuf>,
        hour_csv: Option<PathBuf>,
        logo: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = day_csv {
            self.day_csv = p;
        }
        if let Some(p) = hour_csv {
            self.hour_csv = p;
        }
        if let Some(p) = logo {
            self.logo = p;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_env_empty() {
        let config = ReportConfig::from_lookup(|_| None);
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.day_csv, PathBuf::from("./data/day.csv"));
    }

    #[test]
    fn test_env_values_override_defaults() {
        let vars: HashMap<&str, &str> = [("BIKE_DAY_CSV", "/tmp/d.csv"), ("BIKE_LOGO", "  ")]
            .into_iter()
            .collect();
        let config = ReportConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.day_csv, PathBuf::from("/tmp/d.csv"));
        assert_eq!(config.hour_csv, PathBuf::from(DEFAULT_HOUR_CSV));
        // blank values are treated as unset
        assert_eq!(config.logo, PathBuf::from(DEFAULT_LOGO));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = ReportConfig::default().with_overrides(
            None,
            Some(PathBuf::from("h.csv")),
            Some(PathBuf::from("l.png")),
        );
        assert_eq!(config.day_csv, PathBuf::from(DEFAULT_DAY_CSV));
        assert_eq!(config.hour_csv, PathBuf::from("h.csv"));
        assert_eq!(config.logo, PathBuf::from("l.png"));
    }
}
