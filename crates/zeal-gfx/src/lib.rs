//! Codecs for the Zeal 8-bit tile graphics formats.
//!
//! Tilesets are 16x16 tiles of palette indices packed at 1, 2, 4 or 8 bits
//! per pixel and optionally run-length encoded. Palettes are little-endian
//! RGB565 colors and tilemaps hold one tileset index per byte.

// Modules --------------------------------------------------------------------
pub mod color;
pub mod error;
pub mod image;
pub mod pixel;
pub mod rle;
pub mod screen;
pub mod tilemap;
pub mod tileset;
pub mod tiles;


// Re-Exports -----------------------------------------------------------------
pub use self::color::{from16, to16, Palette, Rgb};
pub use self::error::ZealError;
pub use self::image::IndexedImage;
pub use self::pixel::{pack, unpack, BitDepth};
pub use self::screen::{split, Screen, ScreenSize, WorldGrid};
pub use self::tileset::{Compression, EncodedTileset, TilesetDecoder, TilesetEncoder, TilesetOptions};
pub use self::tiles::{dedupe, Deduplicated, Tile, TILE_HEIGHT, TILE_PIXELS, TILE_WIDTH};
