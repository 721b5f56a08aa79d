//! CSV loading for the daily and hourly bike-share tables and the sidebar logo.
//!
//! Everything here is read once at startup into a [`Dataset`] / [`Logo`] that
//! the rest of the program borrows. A missing or malformed file is fatal.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::config::ReportConfig;

/// One row of `day.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub instant: u32,
    pub dteday: NaiveDate,
    pub season: u8,
    pub yr: u8,
    pub mnth: u8,
    pub holiday: u8,
    pub weekday: u8,
    pub workingday: u8,
    pub weathersit: u8,
    pub temp: f64,
    pub atemp: f64,
    pub hum: f64,
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    pub cnt: u32,
}

/// One row of `hour.csv`. Same shape as [`DailyRecord`] plus the hour of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub instant: u32,
    pub dteday: NaiveDate,
    pub season: u8,
    pub yr: u8,
    pub mnth: u8,
    pub hr: u8,
    pub holiday: u8,
    pub weekday: u8,
    pub workingday: u8,
    pub weathersit: u8,
    pub temp: f64,
    pub atemp: f64,
    pub hum: f64,
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    pub cnt: u32,
}

/// Both input tables, loaded once and only borrowed afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub day: Vec<DailyRecord>,
    /// Not consumed by any view yet.
    pub hour: Vec<HourlyRecord>,
}

impl Dataset {
    /// Reads the daily and hourly tables named in `config`.
    ///
    /// # Errors
    ///
    /// Fails if either file is missing or any row does not decode.
    #[tracing::instrument(skip_all, fields(day = %config.day_csv.display(), hour = %config.hour_csv.display()))]
    pub fn load(config: &ReportConfig) -> Result<Self> {
        let day = read_table(&config.day_csv)?;
        let hour = read_table(&config.hour_csv)?;

        info!(
            day_rows = day.len(),
            hour_rows = hour.len(),
            "Dataset loaded"
        );

        Ok(Self { day, hour })
    }
}

/// Opens `path` and decodes every row as `T`.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file =
        File::open(path).with_context(|| format!("failed to open table {}", path.display()))?;
    let rows = read_records(file).with_context(|| format!("malformed table {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "Table read");
    Ok(rows)
}

/// Decodes headered CSV from any reader.
pub fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let record: T = result.with_context(|| format!("bad record on line {}", i + 2))?;
        rows.push(record);
    }

    Ok(rows)
}

/// The sidebar image, held as a `data:` URI so pages stay self-contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    data_uri: String,
}

impl Logo {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read logo {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Logo read");
        Ok(Self::from_bytes(&bytes, mime_for(path)))
    }

    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        Self {
            data_uri: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        }
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DAY_HEADER: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

    #[test]
    fn test_read_daily_records() {
        let csv = format!(
            "{DAY_HEADER}\n1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985\n"
        );
        let rows: Vec<DailyRecord> = read_records(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.dteday, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(r.weekday, 6);
        assert_eq!(r.weathersit, 2);
        assert_eq!(r.casual + r.registered, r.cnt);
    }

    #[test]
    fn test_read_hourly_records() {
        let csv = "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt\n\
                   1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16\n\
                   2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40\n";
        let rows: Vec<HourlyRecord> = read_records(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].hr, 1);
        assert_eq!(rows[1].cnt, 40);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let csv = format!("{DAY_HEADER}\n1,2011-01-01,1,0,1,0,six,0,2,0.3,0.3,0.8,0.1,331,654,985\n");
        let result: Result<Vec<DailyRecord>> = read_records(csv.as_bytes());
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result: Result<Vec<DailyRecord>> = read_table(Path::new("/nonexistent/day.csv"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/day.csv"));
    }

    #[test]
    fn test_load_fails_when_hour_table_missing() {
        let dir = tempfile::tempdir().unwrap();
        let day_path = dir.path().join("day.csv");
        std::fs::write(&day_path, format!("{DAY_HEADER}\n")).unwrap();

        let config = ReportConfig {
            day_csv: day_path,
            hour_csv: dir.path().join("hour.csv"),
            logo: dir.path().join("logo.png"),
        };

        assert!(Dataset::load(&config).is_err());
    }

    #[test]
    fn test_logo_data_uri() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"abc").unwrap();

        let logo = Logo::load(file.path()).unwrap();
        assert_eq!(logo.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_mime_for_unknown_extension() {
        assert_eq!(mime_for(Path::new("logo.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("logo")), "application/octet-stream");
    }
}
