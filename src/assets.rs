//! Image asset loading.
//!
//! Assets are loaded once at application assembly time, before any widget
//! that references them is built. A failed load is reported to the caller
//! and never retried here.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::debug;

use crate::bitmap::Bitmap;
use crate::error::Error;

/// Source of bitmaps keyed by an identifier (path, URL, name).
pub trait AssetProvider {
    fn load_image(&mut self, id: &str) -> Result<Bitmap, Error>;
}

/// In-memory asset provider.
#[derive(Debug, Default, Clone)]
pub struct AssetCatalog {
    images: BTreeMap<String, Bitmap>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, bitmap: Bitmap) {
        self.images.insert(id.to_string(), bitmap);
    }

    pub fn with_image(mut self, id: &str, bitmap: Bitmap) -> Self {
        self.insert(id, bitmap);
        self
    }
}

impl AssetProvider for AssetCatalog {
    fn load_image(&mut self, id: &str) -> Result<Bitmap, Error> {
        self.images
            .get(id)
            .cloned()
            .ok_or_else(|| Error::AssetNotFound { id: id.to_string() })
    }
}

/// Load every id in order, failing on the first missing asset.
pub fn load_all<P: AssetProvider>(provider: &mut P, ids: &[&str]) -> Result<Vec<Bitmap>, Error> {
    let images = ids
        .iter()
        .map(|id| provider.load_image(id))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Loaded {} assets", images.len());
    Ok(images)
}
