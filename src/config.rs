//! Tracker configuration
//!
//! Every tunable of the run lives here with its default. There is no config
//! file or environment lookup; the defaults are the configuration.

use bevy::prelude::*;

pub const OPEN_NOTIFY_BASE_URL: &str = "http://api.open-notify.org";

pub const WINDOW_TITLE: &str = "ISS Location";
pub const WINDOW_WIDTH: u32 = 720;
pub const WINDOW_HEIGHT: u32 = 360;

pub const MAP_IMAGE_PATH: &str = "./map.gif";
pub const ICON_IMAGE_PATH: &str = "./iss.gif";

pub const INDIANAPOLIS_NAME: &str = "Indianapolis, IN";
pub const INDIANAPOLIS_LAT: f64 = 39.7681;
pub const INDIANAPOLIS_LON: f64 = -86.1581;

/// Open Notify endpoints, relative to `base_url`
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub astronauts_path: String,
    pub position_path: String,
    pub passover_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: OPEN_NOTIFY_BASE_URL.to_string(),
            astronauts_path: "astros.json".to_string(),
            position_path: "iss-now.json".to_string(),
            passover_path: "iss-pass.json".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Top-left corner of the window on the desktop, in physical pixels
    pub start: IVec2,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            start: IVec2::ZERO,
        }
    }
}

/// Fixed ground location whose next passover is shown on the map
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for ReferenceLocation {
    fn default() -> Self {
        Self {
            name: INDIANAPOLIS_NAME.to_string(),
            latitude: INDIANAPOLIS_LAT,
            longitude: INDIANAPOLIS_LON,
        }
    }
}

/// Image files read from the working directory at startup
#[derive(Clone, Debug)]
pub struct AssetConfig {
    pub map_path: String,
    pub icon_path: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            map_path: MAP_IMAGE_PATH.to_string(),
            icon_path: ICON_IMAGE_PATH.to_string(),
        }
    }
}

/// Look of the reference marker
#[derive(Clone, Debug)]
pub struct MarkerStyle {
    /// Dot diameter in window pixels
    pub dot_diameter: f32,
    pub dot_color: Color,
    /// Distance moved along the heading before writing the label, in degrees
    pub label_offset: f64,
    pub label_color: Color,
    pub font_size: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            dot_diameter: 2.0,
            dot_color: Color::srgb(1.0, 1.0, 0.0),
            label_offset: 2.0,
            label_color: Color::srgb(1.0, 1.0, 0.0),
            font_size: 12.0,
        }
    }
}

#[derive(Resource, Clone, Debug, Default)]
pub struct TrackerConfig {
    pub api: ApiConfig,
    pub window: WindowConfig,
    pub reference: ReferenceLocation,
    pub assets: AssetConfig,
    pub marker: MarkerStyle,
}
