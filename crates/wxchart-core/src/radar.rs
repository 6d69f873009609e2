//! Radar-tile manifest and tile-layer descriptors.
//!
//! The radar service publishes a manifest listing past and nowcast frames.
//! Each frame becomes one raster tile layer for the map renderer.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TILE_HOST: &str = "https://tilecache.rainviewer.com";

/// One radar frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarFrame {
    /// Unix timestamp (seconds).
    pub time: i64,
    /// Path prefix of the frame's tiles, e.g. `/v2/radar/1672531200`.
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarInfo {
    #[serde(default)]
    pub past: Vec<RadarFrame>,
    #[serde(default)]
    pub nowcast: Vec<RadarFrame>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteInfo {
    #[serde(default)]
    pub infrared: Vec<RadarFrame>,
}

/// The radar-tile manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarManifest {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub generated: i64,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub radar: RadarInfo,
    #[serde(default)]
    pub satellite: SatelliteInfo,
}

/// Which frames to turn into layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSet {
    Past,
    /// Short-term forecast frames.
    #[default]
    Nowcast,
}

impl std::fmt::Display for FrameSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameSet::Past => write!(f, "past"),
            FrameSet::Nowcast => write!(f, "nowcast"),
        }
    }
}

/// Tile rendering options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileOptions {
    pub tile_size: u32,
    /// Color scheme index.
    pub color: u8,
    pub smooth: bool,
    pub snow: bool,
    pub opacity: f64,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            tile_size: 256,
            color: 2,
            smooth: true,
            snow: true,
            opacity: 0.5,
        }
    }
}

/// A raster tile layer for the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub id: String,
    pub path: String,
    pub time: i64,
    /// URL template with `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url: String,
    pub tile_size: u32,
    pub opacity: f64,
}

/// Build one tile layer per frame of the requested set, in manifest order.
///
/// # Arguments
///
/// * `manifest` - The decoded radar-tile manifest
/// * `frames` - Whether to use past or nowcast frames
/// * `options` - Tile size, color scheme and opacity
///
/// # Returns
///
/// One layer per frame. An empty frame list gives no layers, and an empty
/// manifest host falls back to the default tile host.
pub fn tile_layers(
    manifest: &RadarManifest,
    frames: FrameSet,
    options: TileOptions,
) -> Vec<TileLayer> {
    let host = match manifest.host.trim_end_matches('/') {
        "" => DEFAULT_TILE_HOST,
        host => host,
    };

    let selected = match frames {
        FrameSet::Past => &manifest.radar.past,
        FrameSet::Nowcast => &manifest.radar.nowcast,
    };

    selected
        .iter()
        .map(|frame| TileLayer {
            id: format!("rainviewer_{}", frame.path),
            path: frame.path.clone(),
            time: frame.time,
            tile_url: format!(
                "{}{}/{}/{{z}}/{{x}}/{{y}}/{}/{}_{}.png",
                host,
                frame.path,
                options.tile_size,
                options.color,
                u8::from(options.smooth),
                u8::from(options.snow)
            ),
            tile_size: options.tile_size,
            opacity: options.opacity,
        })
        .collect()
}
