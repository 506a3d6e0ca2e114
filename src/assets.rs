//! Image size lookup
//!
//! The core never touches pixels. It only needs to know how big each named
//! image is, so it can size brick tiles, ribbons and sprites.

use std::collections::HashMap;

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Source of image dimensions, keyed by logical name (file name without extension)
pub trait ImageProvider {
    /// Pixel size of the named image, or `None` if it was never loaded
    fn image_size(&self, name: &str) -> Option<UVec2>;
}

/// Look up an image that must exist and must not be degenerate
pub fn require_size(images: &dyn ImageProvider, name: &str) -> Result<UVec2, ConfigError> {
    let size = images
        .image_size(name)
        .ok_or_else(|| ConfigError::MissingImage(name.to_string()))?;
    if size.x == 0 || size.y == 0 {
        return Err(ConfigError::ZeroSizedImage(name.to_string()));
    }
    Ok(size)
}

/// In-memory table of image sizes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageTable {
    sizes: HashMap<String, UVec2>,
}

impl ImageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, width: u32, height: u32) -> Self {
        self.insert(name, width, height);
        self
    }

    pub fn insert(&mut self, name: &str, width: u32, height: u32) {
        self.sizes.insert(name.to_string(), UVec2::new(width, height));
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl ImageProvider for ImageTable {
    fn image_size(&self, name: &str) -> Option<UVec2> {
        self.sizes.get(name).copied()
    }
}
