// STD Dependencies -----------------------------------------------------------
use std::path::PathBuf;


// External Dependencies ------------------------------------------------------
use file_io::{FileReader, FileWriter, Logger};
use zeal_gfx::{BitDepth, Compression, TilesetEncoder};


// Internal Dependencies ------------------------------------------------------
use crate::config::ToolConfig;
use crate::format::{FileKind, ZealFormat};
use crate::raster;
use crate::util;


// Arguments ------------------------------------------------------------------
#[derive(Debug, Default)]
pub struct TilesetArgs {
    pub image_file: PathBuf,
    pub tileset_file: Option<PathBuf>,
    pub palette_file: Option<PathBuf>,
    pub tilemap_file: Option<PathBuf>,
    /// `Some(None)` requests automatic detection.
    pub bpp: Option<Option<BitDepth>>,
    pub compression: Option<Compression>,
    pub merge: bool,
    pub generate_tilemap: bool
}


// Image to Tileset Conversion ------------------------------------------------
pub fn convert<IO: FileReader + FileWriter>(
    logger: &mut Logger,
    io: &mut IO,
    config: &ToolConfig,
    args: TilesetArgs

) -> Result<(), String> {

    let mut options = config.tileset.options()?;

    // A compressed output extension implies the per tile layout unless the
    // configuration already picked one
    let requested = args.tileset_file.as_ref().and_then(|f| ZealFormat::from_path(f));
    if requested.map(|f| f.compressed).unwrap_or(false) && !options.compression.is_compressed() {
        options.compression = Compression::PerTile;
    }

    if let Some(bpp) = args.bpp {
        options.bpp = bpp;
    }
    if let Some(compression) = args.compression {
        options.compression = compression;
    }
    if args.merge {
        options.merge = true;
    }
    if args.generate_tilemap || args.tilemap_file.is_some() {
        options.tilemap = true;
    }

    if options.merge && !options.tilemap {
        logger.warning("Merging duplicate tiles without a tilemap loses the image layout");
    }
    if let Some(format) = requested {
        if format.compressed != options.compression.is_compressed() {
            logger.warning(format!(
                "Tileset file extension \".{}\" does not match {} compression",
                format.extension(), options.compression
            ));
        }
    }

    let bytes = io.read_binary_file(&args.image_file).map_err(|e| {
        format!("Failed to load image file {}", e)
    })?;
    let image = raster::load_gif(&bytes)?;
    let encoded = TilesetEncoder::new(options.clone()).encode(&image).map_err(|e| {
        format!("Failed to convert \"{}\": {}", args.image_file.display(), e)
    })?;

    logger.status("Palette", format!("{} color(s)", encoded.palette.len()));
    if options.merge {
        logger.status("Tiles", format!(
            "{} unique of {} tile(s) at {}",
            encoded.tile_count, encoded.source_tile_count, encoded.bpp
        ));

    } else {
        logger.status("Tiles", format!("{} tile(s) at {}", encoded.tile_count, encoded.bpp));
    }

    let tileset_file = args.tileset_file.unwrap_or_else(|| {
        ZealFormat::new(FileKind::Tileset, options.compression.is_compressed()).sibling_of(&args.image_file)
    });
    logger.status("Writing", format!("{} ({} byte(s), {} compression)", tileset_file.display(), encoded.tileset.len(), options.compression));
    util::output_binary(io, Some(tileset_file.as_path()), encoded.tileset)?;

    let palette_file = args.palette_file.unwrap_or_else(|| {
        ZealFormat::new(FileKind::Palette, false).sibling_of(&args.image_file)
    });
    logger.status("Writing", format!("{}", palette_file.display()));
    util::save_zeal_file(io, &palette_file, encoded.palette.to_bytes())?;

    if let Some(tilemap) = encoded.tilemap {
        let tilemap_file = args.tilemap_file.unwrap_or_else(|| {
            ZealFormat::new(FileKind::Tilemap, false).sibling_of(&args.image_file)
        });
        logger.status("Writing", format!("{}", tilemap_file.display()));
        util::save_zeal_file(io, &tilemap_file, tilemap)?;
    }
    Ok(())
}


#[cfg(test)]
mod test {

    use std::path::PathBuf;
    use file_io::Logger;
    use file_io::mocks::MockFileReader;
    use zeal_gfx::{BitDepth, Compression, IndexedImage, TilesetDecoder};
    use crate::config::ToolConfig;
    use crate::raster;
    use super::{convert, TilesetArgs};

    // 48x16 image with tiles A, B, A
    fn mock_io(colors: usize) -> MockFileReader {
        let pixels = (0..48 * 16).map(|i| {
            let x = i % 48;
            if x / 16 == 1 { 1 } else { ((x + i / 48) % 2) as u8 }

        }).collect();
        let table = (0..colors).map(|c| [c as u8 * 16, c as u8 * 16, 255]).collect();
        let image = IndexedImage::new(48, 16, pixels, table).unwrap();
        let mut io = MockFileReader::default();
        io.add_binary_file("tiles.gif", raster::save_gif(&image).unwrap());
        io
    }

    fn args() -> TilesetArgs {
        TilesetArgs {
            image_file: PathBuf::from("tiles.gif"),
            ..TilesetArgs::default()
        }
    }

    #[test]
    fn test_convert_defaults() {
        let mut logger = Logger::new();
        let mut io = mock_io(4);
        convert(&mut logger, &mut io, &ToolConfig::default(), args()).unwrap();

        let palette = io.get_binary_file("tiles.ztp").unwrap();
        assert_eq!(palette.len(), 8);
        let tileset = io.get_binary_file("tiles.zts").unwrap();
        assert_eq!(tileset.len(), 3 * 64);
        assert!(io.get_binary_file("tiles.ztm").is_none());
        assert!(!logger.lines().iter().any(|l| l.contains("Warning")));
    }

    #[test]
    fn test_convert_merge() {
        let mut logger = Logger::new();
        let mut io = mock_io(4);
        convert(&mut logger, &mut io, &ToolConfig::default(), TilesetArgs {
            merge: true,
            ..args()

        }).unwrap();
        assert_eq!(io.get_binary_file("tiles.zts").map(|t| t.len()), Some(2 * 64));
        assert!(logger.lines().iter().any(|l| l.contains("loses the image layout")));
    }

    #[test]
    fn test_convert_with_tilemap() {
        let mut logger = Logger::new();
        let mut io = mock_io(4);
        convert(&mut logger, &mut io, &ToolConfig::default(), TilesetArgs {
            tilemap_file: Some(PathBuf::from("out/level.ztm")),
            bpp: Some(Some(BitDepth::Eight)),
            merge: true,
            ..args()

        }).unwrap();
        assert_eq!(io.get_binary_file("out/level.ztm"), Some(vec![0, 1, 0]));
        assert_eq!(io.get_binary_file("tiles.zts").map(|t| t.len()), Some(2 * 256));
    }

    #[test]
    fn test_convert_compressed_extension() {
        let mut logger = Logger::new();
        let mut io = mock_io(4);
        convert(&mut logger, &mut io, &ToolConfig::default(), TilesetArgs {
            tileset_file: Some(PathBuf::from("tiles.zcts")),
            ..args()

        }).unwrap();
        let tileset = io.get_binary_file("tiles.zcts").unwrap();
        let tiles = TilesetDecoder::new(BitDepth::Two, true).decode(&tileset).unwrap();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0], tiles[2]);
        assert!(tiles[1].iter().all(|p| *p == 1));
    }

    #[test]
    fn test_convert_config_and_overrides() {
        let mut logger = Logger::new();
        let mut io = mock_io(4);
        let config = ToolConfig::from_toml("[tileset]\ncompression = \"stream\"\nmerge = true\ntilemap = true").unwrap();
        convert(&mut logger, &mut io, &config, TilesetArgs {
            compression: Some(Compression::None),
            ..args()

        }).unwrap();
        assert!(io.get_binary_file("tiles.zts").is_some());
        assert_eq!(io.get_binary_file("tiles.ztm"), Some(vec![0, 1, 0]));
    }

    #[test]
    fn test_convert_invalid_dimensions() {
        let image = IndexedImage::new(20, 16, vec![0; 320], vec![[0, 0, 0], [255, 255, 255]]).unwrap();
        let mut io = MockFileReader::default();
        io.add_binary_file("odd.gif", raster::save_gif(&image).unwrap());
        let err = convert(&mut Logger::new(), &mut io, &ToolConfig::default(), TilesetArgs {
            image_file: PathBuf::from("odd.gif"),
            ..TilesetArgs::default()

        }).unwrap_err();
        assert!(err.contains("multiple of 16"), "{}", err);
    }

    #[test]
    fn test_convert_missing_image() {
        let mut io = MockFileReader::default();
        assert!(convert(&mut Logger::new(), &mut io, &ToolConfig::default(), args()).is_err());
    }

}
