// Internal Dependencies ------------------------------------------------------
use crate::color::Rgb;
use crate::error::ZealError;


// Indexed Image --------------------------------------------------------------

/// A decoded raster image with one palette index per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
    pub colors: Vec<Rgb>
}

impl IndexedImage {

    pub fn new(width: usize, height: usize, pixels: Vec<u8>, colors: Vec<Rgb>) -> Result<Self, ZealError> {
        if pixels.len() != width * height {
            return Err(ZealError::size_mismatch("Image pixel data", width * height, pixels.len()));

        } else if colors.is_empty() {
            return Err(ZealError::InvalidColorMode("image has no color table".to_string()));
        }
        Ok(Self {
            width,
            height,
            pixels,
            colors
        })
    }

    /// Number of distinct colors the pixels actually reference, counted as
    /// the highest used index plus one.
    pub fn used_colors(&self) -> usize {
        self.pixels.iter().max().map(|m| *m as usize + 1).unwrap_or(0)
    }

}
