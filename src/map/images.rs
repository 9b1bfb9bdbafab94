//! Map and icon images read from the working directory

use crate::config::AssetConfig;
use anyhow::{Context, Result};
use bevy::asset::RenderAssetUsages;
use bevy::image::{CompressedImageFormats, ImageSampler, ImageType};
use bevy::prelude::*;
use std::fs;
use std::path::Path;

/// Decoded images waiting to be added to `Assets<Image>` by the render stages
#[derive(Resource, Default)]
pub struct PendingImages {
    pub map: Option<Image>,
    pub icon: Option<Image>,
}

impl PendingImages {
    /// Read and decode both images. A missing or unreadable file is an error.
    pub fn load(assets: &AssetConfig) -> Result<Self> {
        let map = load_image(&assets.map_path).context("loading world map background")?;
        let icon = load_image(&assets.icon_path).context("loading station icon")?;
        Ok(Self {
            map: Some(map),
            icon: Some(icon),
        })
    }
}

fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    decode_image(&bytes, extension_of(path))
        .with_context(|| format!("cannot decode {}", path.display()))
}

fn extension_of(path: &Path) -> &str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("gif")
}

fn decode_image(bytes: &[u8], extension: &str) -> Result<Image> {
    let image = Image::from_buffer(
        bytes,
        ImageType::Extension(extension),
        CompressedImageFormats::NONE,
        true,
        ImageSampler::Default,
        RenderAssetUsages::default(),
    )?;
    Ok(image)
}
