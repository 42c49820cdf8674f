/// Profile photo loading
///
/// The photo is the only binary asset the site shows. It is decoded off
/// the UI thread, cropped to a square and resized once, then handed to
/// iced as raw RGBA. A missing or broken file falls back to the monogram.

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};
use thiserror::Error;

/// Edge length of the decoded photo (square, physical pixels)
pub const PROFILE_SIZE: u32 = 512;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("background decode task failed: {0}")]
    Task(String),
}

/// Decode the photo at `path` into a square RGBA buffer
pub fn decode_profile(path: &Path, size: u32) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    // Crop to the center square, then scale
    Ok(img.resize_to_fill(size, size, FilterType::Lanczos3).to_rgba8())
}

/// Load the profile photo in a background thread
///
/// Returns `None` when the photo can't be shown; the caller renders the
/// monogram instead.
pub async fn load_profile(path: PathBuf) -> Option<Handle> {
    let shown = path.clone();
    let result = tokio::task::spawn_blocking(move || decode_profile(&path, PROFILE_SIZE))
        .await
        .map_err(|e| AssetError::Task(e.to_string()))
        .and_then(|decoded| decoded);

    match result {
        Ok(rgba) => {
            tracing::info!(path = %shown.display(), "profile photo loaded");
            let (width, height) = rgba.dimensions();
            Some(Handle::from_rgba(width, height, rgba.into_raw()))
        }
        Err(e) => {
            tracing::warn!("{e}; showing monogram instead");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_crops_to_square() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbaImage::from_pixel(80, 40, image::Rgba([20, 120, 200, 255]))
            .save(&path)
            .unwrap();

        let decoded = decode_profile(&path, 32).unwrap();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.get_pixel(16, 16).0[2], 200);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_profile(&dir.path().join("absent.png"), 32).unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = decode_profile(&path, 32).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_load_profile_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_profile(dir.path().join("absent.png")).await.is_none());
    }
}
