//! File-backed sprite loading
//!
//! Sprites are decoded with `image` so a file only counts as loaded when it
//! is a complete PNG. Texture upload belongs to the host; the handle keeps
//! the asset name and its size.

use std::path::PathBuf;

use image::{GenericImageView, ImageFormat};

use super::{SpriteHandle, SpriteLoader};
use crate::error::AssetError;

#[derive(Debug, Clone)]
pub struct FileSpriteLoader {
    root: PathBuf,
}

impl FileSpriteLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SpriteLoader for FileSpriteLoader {
    fn load(&mut self, asset: &str) -> Result<SpriteHandle, AssetError> {
        let path = self.root.join(asset);
        let bytes = std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(path.clone())
            } else {
                AssetError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png).map_err(
            |source| AssetError::Decode {
                path: path.clone(),
                source,
            },
        )?;

        let (width, height) = img.dimensions();
        log::debug!("Loaded sprite {} ({}x{})", path.display(), width, height);
        Ok(SpriteHandle {
            asset: asset.to_string(),
            width,
            height,
        })
    }
}
