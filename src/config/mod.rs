/// Application configuration module
use chrono::{FixedOffset, Offset, Utc};
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub almanac_url: String,
    pub almanac_id: String,
    pub apod_url: String,
    pub apod_api_key: String,
    pub observer_coords: String,
    pub observer_tz: String,
    pub refresh_every_seconds: u64,
    pub photos_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let almanac_url = env::var("ALMANAC_URL")
            .unwrap_or_else(|_| "https://aa.usno.navy.mil/api/rstt/oneday".to_string());

        let almanac_id = env::var("USNO_ID").unwrap_or_default();

        let apod_url = env::var("APOD_URL")
            .unwrap_or_else(|_| "https://api.nasa.gov/planetary/apod".to_string());

        let apod_api_key = env::var("NASA_API_KEY").unwrap_or_default();

        // Coordinates of Swarthmore, Eastern time (UTC-4:00)
        let observer_coords =
            env::var("OBSERVER_COORDS").unwrap_or_else(|_| "39.90,-75.35".to_string());
        let observer_tz = env::var("OBSERVER_TZ").unwrap_or_else(|_| "-4".to_string());

        let refresh_every_seconds = env_u64("REFRESH_EVERY_SECONDS", 86400); // daily

        let photos_dir =
            PathBuf::from(env::var("PHOTOS_DIR").unwrap_or_else(|_| "static/photos".to_string()));
        let pages_dir = PathBuf::from(env::var("PAGES_DIR").unwrap_or_else(|_| "pages".to_string()));

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            almanac_url,
            almanac_id,
            apod_url,
            apod_api_key,
            observer_coords,
            observer_tz,
            refresh_every_seconds,
            photos_dir,
            pages_dir,
            bind_addr,
        })
    }

    /// Fixed UTC offset of the observer, derived from the same
    /// whole-hour offset string sent to the almanac API. Unparsable
    /// values fall back to UTC.
    pub fn utc_offset(&self) -> FixedOffset {
        let hours: i32 = self.observer_tz.trim().parse().unwrap_or(0);
        FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_tz(tz: &str) -> AppConfig {
        AppConfig {
            almanac_url: String::new(),
            almanac_id: String::new(),
            apod_url: String::new(),
            apod_api_key: String::new(),
            observer_coords: String::new(),
            observer_tz: tz.to_string(),
            refresh_every_seconds: 86400,
            photos_dir: PathBuf::new(),
            pages_dir: PathBuf::new(),
            bind_addr: String::new(),
        }
    }

    #[test]
    fn test_utc_offset_negative_hours() {
        let offset = config_with_tz("-4").utc_offset();
        assert_eq!(offset.local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_utc_offset_unparsable_falls_back_to_utc() {
        let offset = config_with_tz("eastern").utc_offset();
        assert_eq!(offset.local_minus_utc(), 0);
    }

    #[test]
    fn test_utc_offset_out_of_range_falls_back_to_utc() {
        let offset = config_with_tz("99").utc_offset();
        assert_eq!(offset.local_minus_utc(), 0);
    }
}
