// File: crates/poster-core/src/loader.rs
// Summary: Map image sources, async loading with a bounded timeout, and decoding to Skia images.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use skia_safe as skia;
use tracing::warn;

use crate::error::LoadError;

/// Where a map bitmap comes from, already resolved by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
    Url(String),
}

impl ImageSource {
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(p) => p.display().to_string(),
            ImageSource::Bytes(b) => format!("<{} bytes>", b.len()),
            ImageSource::Url(u) => u.clone(),
        }
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self { ImageSource::Bytes(bytes.into()) }
}

/// Fetches encoded image bytes for a source.
pub trait ImageLoader {
    fn load(&self, source: &ImageSource) -> impl Future<Output = Result<Vec<u8>, LoadError>>;
}

/// Reads paths from disk and passes in-memory bytes through. URLs are fetched by the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    async fn load(&self, source: &ImageSource) -> Result<Vec<u8>, LoadError> {
        match source {
            ImageSource::Path(path) => tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            }),
            ImageSource::Bytes(bytes) => Ok(bytes.to_vec()),
            ImageSource::Url(url) => Err(LoadError::Unsupported(url.clone())),
        }
    }
}

/// Decode PNG/JPEG bytes into a Skia raster image.
pub fn decode_image(bytes: &[u8]) -> Result<skia::Image, LoadError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::EmptyImage);
    }
    let info = skia::ImageInfo::new(
        (width as i32, height as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let data = skia::Data::new_copy(rgba.as_raw());
    skia::images::raster_from_data(&info, data, width as usize * 4)
        .ok_or(LoadError::Raster { width, height })
}

/// Settled state of one map load.
pub enum MapLoad {
    Ready(skia::Image),
    Failed(LoadError),
    TimedOut,
}

/// Load and decode with an upper bound on wall time. Failures are logged, never raised.
pub async fn load_map<L: ImageLoader>(loader: &L, source: &ImageSource, timeout: Duration) -> MapLoad {
    match tokio::time::timeout(timeout, loader.load(source)).await {
        Err(_) => {
            warn!(source = %source.describe(), ?timeout, "map image load timed out");
            MapLoad::TimedOut
        }
        Ok(Err(e)) => {
            warn!(source = %source.describe(), error = %e, "map image load failed");
            MapLoad::Failed(e)
        }
        Ok(Ok(bytes)) => match decode_image(&bytes) {
            Ok(img) => MapLoad::Ready(img),
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "map image decode failed");
                MapLoad::Failed(e)
            }
        },
    }
}
