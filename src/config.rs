use std::path::PathBuf;

use crate::types::workout::Coordinates;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage_dir: Option<PathBuf>,
    pub storage_key: String,
    pub map_zoom: u8,
    pub home_position: Option<Coordinates>,
    pub allow_negative_elevation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            storage_dir: None,
            storage_key: "workouts".to_string(),
            map_zoom: 13,
            home_position: None,
            allow_negative_elevation: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let storage_dir = std::env::var("STORAGE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let storage_key = std::env::var("STORAGE_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.storage_key);

        let map_zoom = std::env::var("MAP_ZOOM")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.map_zoom);

        let home_lat = std::env::var("HOME_LAT").ok().and_then(|s| s.parse().ok());
        let home_lng = std::env::var("HOME_LNG").ok().and_then(|s| s.parse().ok());
        let home_position = match (home_lat, home_lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        };

        let allow_negative_elevation = std::env::var("ALLOW_NEGATIVE_ELEVATION")
            .ok()
            .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.allow_negative_elevation);

        Self {
            port,
            storage_dir,
            storage_key,
            map_zoom,
            home_position,
            allow_negative_elevation,
        }
    }
}
