// STD Dependencies -----------------------------------------------------------
use std::collections::HashMap;


// Internal Dependencies ------------------------------------------------------
use crate::color::Rgb;
use crate::error::ZealError;
use crate::image::IndexedImage;


// Statics --------------------------------------------------------------------
pub const TILE_WIDTH: usize = 16;
pub const TILE_HEIGHT: usize = 16;
pub const TILE_PIXELS: usize = TILE_WIDTH * TILE_HEIGHT;

/// Tiles per row when laying out a tileset as a sheet image.
pub const SHEET_COLUMNS: usize = 16;


// Types ----------------------------------------------------------------------
pub type Tile = [u8; TILE_PIXELS];


// Tile Extraction ------------------------------------------------------------
pub fn image_to_tiles(image: &IndexedImage) -> Result<Vec<Tile>, ZealError> {
    let (w, h) = (image.width, image.height);
    if w % TILE_WIDTH != 0 {
        return Err(ZealError::InvalidDimensions(format!("Image width of {} pixel(s) is not a multiple of {}", w, TILE_WIDTH)));

    } else if h % TILE_HEIGHT != 0 {
        return Err(ZealError::InvalidDimensions(format!("Image height of {} pixel(s) is not a multiple of {}", h, TILE_HEIGHT)));
    }

    let mut tiles: Vec<Tile> = Vec::with_capacity(w / TILE_WIDTH * h / TILE_HEIGHT);
    for ty in 0..h / TILE_HEIGHT {
        for tx in 0..w / TILE_WIDTH {
            let ox = tx * TILE_WIDTH;
            let oy = ty * TILE_HEIGHT;
            let mut tile = [0; TILE_PIXELS];
            for y in 0..TILE_HEIGHT {
                let row = (oy + y) * w + ox;
                tile[y * TILE_WIDTH..(y + 1) * TILE_WIDTH].copy_from_slice(&image.pixels[row..row + TILE_WIDTH]);
            }
            tiles.push(tile);
        }
    }
    Ok(tiles)
}

/// Lays tiles out left to right, wrapping after `SHEET_COLUMNS` tiles.
pub fn tiles_to_image(tiles: &[Tile], colors: Vec<Rgb>) -> Result<IndexedImage, ZealError> {
    if tiles.is_empty() {
        return Err(ZealError::InvalidDimensions("Tileset contains no tiles".to_string()));
    }

    let columns = tiles.len().min(SHEET_COLUMNS);
    let rows = (tiles.len() + SHEET_COLUMNS - 1) / SHEET_COLUMNS;
    let (w, h) = (columns * TILE_WIDTH, rows * TILE_HEIGHT);
    let mut pixels = vec![0; w * h];
    for (index, tile) in tiles.iter().enumerate() {
        let ox = (index % SHEET_COLUMNS) * TILE_WIDTH;
        let oy = (index / SHEET_COLUMNS) * TILE_HEIGHT;
        for y in 0..TILE_HEIGHT {
            let row = (oy + y) * w + ox;
            pixels[row..row + TILE_WIDTH].copy_from_slice(&tile[y * TILE_WIDTH..(y + 1) * TILE_WIDTH]);
        }
    }
    IndexedImage::new(w, h, pixels, colors)
}


// Tile Deduplication ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduplicated {
    pub unique: Vec<Tile>,
    pub index_map: Vec<usize>
}

impl Deduplicated {

    /// Rebuilds the original tile sequence.
    pub fn expand(&self) -> Vec<Tile> {
        self.index_map.iter().map(|i| self.unique[*i]).collect()
    }

}

pub fn dedupe(tiles: &[Tile]) -> Deduplicated {
    let mut tile_index_map: HashMap<&Tile, usize> = HashMap::new();
    let mut unique: Vec<Tile> = Vec::new();
    let mut index_map = Vec::with_capacity(tiles.len());
    for tile in tiles {
        let index = *tile_index_map.entry(tile).or_insert_with(|| {
            unique.push(*tile);
            unique.len() - 1
        });
        index_map.push(index);
    }
    log::debug!("Merged {} tile(s) into {} unique tile(s)", tiles.len(), unique.len());
    Deduplicated {
        unique,
        index_map
    }
}
