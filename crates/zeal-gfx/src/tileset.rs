// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::str::FromStr;


// Internal Dependencies ------------------------------------------------------
use crate::color::{Palette, MAX_COLORS};
use crate::error::ZealError;
use crate::image::IndexedImage;
use crate::pixel::{self, BitDepth};
use crate::rle;
use crate::tilemap;
use crate::tiles::{self, Tile};


// Options --------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    /// Every packed tile is run-length encoded on its own.
    PerTile,
    /// The concatenated tileset is run-length encoded as one stream.
    Stream
}

impl Compression {
    pub fn is_compressed(self) -> bool {
        self != Compression::None
    }
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Compression::None),
            "tile" => Ok(Compression::PerTile),
            "stream" => Ok(Compression::Stream),
            _ => Err(format!("Unknown compression \"{}\" (expected none, tile or stream)", s))
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Compression::None => write!(f, "none"),
            Compression::PerTile => write!(f, "tile"),
            Compression::Stream => write!(f, "stream")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetOptions {
    /// Forced bit depth, picked from the color table size when unset.
    pub bpp: Option<BitDepth>,
    pub compression: Compression,
    pub merge: bool,
    pub tilemap: bool
}

impl Default for TilesetOptions {
    fn default() -> Self {
        Self {
            bpp: None,
            compression: Compression::None,
            merge: false,
            tilemap: false
        }
    }
}


// Encoding -------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTileset {
    pub bpp: BitDepth,
    pub palette: Palette,
    pub tileset: Vec<u8>,
    pub tilemap: Option<Vec<u8>>,
    pub tile_count: usize,
    pub source_tile_count: usize
}

#[derive(Debug)]
pub struct TilesetEncoder {
    options: TilesetOptions
}

impl TilesetEncoder {

    pub fn new(options: TilesetOptions) -> Self {
        Self {
            options
        }
    }

    pub fn encode(&self, image: &IndexedImage) -> Result<EncodedTileset, ZealError> {
        if image.colors.len() > MAX_COLORS {
            return Err(ZealError::InvalidColorMode(format!(
                "color table has {} entries, at most {} are supported",
                image.colors.len(), MAX_COLORS
            )));
        }

        let bpp = self.options.bpp.unwrap_or_else(|| BitDepth::for_color_count(image.colors.len()));
        let palette = Palette::from_rgb(&image.colors, bpp.colors())?;
        if image.used_colors() > bpp.colors() {
            log::warn!(
                "Image references {} color(s) but {} only addresses {}, pixel values will be truncated",
                image.used_colors(), bpp, bpp.colors()
            );
        }

        let source = tiles::image_to_tiles(image)?;
        let source_tile_count = source.len();
        let (tiles, index_map) = if self.options.merge {
            let merged = tiles::dedupe(&source);
            (merged.unique, merged.index_map)

        } else {
            (source, (0..source_tile_count).collect())
        };

        let tilemap = if self.options.tilemap {
            Some(tilemap::from_index_map(&index_map)?)

        } else {
            None
        };

        let packed = tiles.iter().map(|t| pixel::pack(t, bpp)).collect::<Result<Vec<Vec<u8>>, ZealError>>()?;
        let tileset = match self.options.compression {
            Compression::None => packed.concat(),
            Compression::PerTile => packed.iter().flat_map(|t| rle::encode(t)).collect(),
            Compression::Stream => rle::encode(&packed.concat())
        };
        log::debug!(
            "Encoded {} tile(s) at {} into {} byte(s) ({} compression)",
            tiles.len(), bpp, tileset.len(), self.options.compression
        );

        Ok(EncodedTileset {
            bpp,
            palette,
            tileset,
            tilemap,
            tile_count: tiles.len(),
            source_tile_count
        })
    }

}


// Decoding -------------------------------------------------------------------
#[derive(Debug)]
pub struct TilesetDecoder {
    bpp: BitDepth,
    compressed: bool
}

impl TilesetDecoder {

    pub fn new(bpp: BitDepth, compressed: bool) -> Self {
        Self {
            bpp,
            compressed
        }
    }

    /// Decodes a tileset stream. Per tile and whole stream compressed
    /// tilesets are both expanded as a single stream.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<Tile>, ZealError> {
        let raw = if self.compressed {
            rle::decode(data)?

        } else {
            data.to_vec()
        };

        let tile_size = self.bpp.tile_size();
        let remainder = raw.len() % tile_size;
        if remainder != 0 {
            return Err(ZealError::truncated("Tileset stream", raw.len() - remainder));
        }
        raw.chunks(tile_size).map(|c| pixel::unpack(c, self.bpp)).collect()
    }

    /// Decodes a tileset and its palette into a sheet image.
    pub fn decode_sheet(&self, data: &[u8], palette: &[u8]) -> Result<IndexedImage, ZealError> {
        let tiles = self.decode(data)?;
        let palette = Palette::from_bytes(palette)?;
        let mut colors = palette.to_rgb();
        colors.resize(MAX_COLORS, [0, 0, 0]);
        tiles::tiles_to_image(&tiles, colors)
    }

}
