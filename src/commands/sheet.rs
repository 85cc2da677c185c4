// STD Dependencies -----------------------------------------------------------
use std::path::PathBuf;


// External Dependencies ------------------------------------------------------
use file_io::{FileReader, FileWriter, Logger};
use zeal_gfx::{BitDepth, TilesetDecoder};


// Internal Dependencies ------------------------------------------------------
use crate::format::ZealFormat;
use crate::raster;
use crate::util;


// Arguments ------------------------------------------------------------------
#[derive(Debug)]
pub struct SheetArgs {
    pub tileset_file: PathBuf,
    pub palette_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub bpp: BitDepth,
    /// Defaults to the tileset's file extension.
    pub compressed: Option<bool>
}


// Tileset to Sheet Conversion ------------------------------------------------
pub fn convert<IO: FileReader + FileWriter>(
    logger: &mut Logger,
    io: &mut IO,
    args: SheetArgs

) -> Result<(), String> {

    let compressed = args.compressed.unwrap_or_else(|| {
        ZealFormat::from_path(&args.tileset_file).map(|f| f.compressed).unwrap_or(false)
    });
    let tileset = util::load_binary(&*io, Some(args.tileset_file.as_path()))?;
    let palette = util::load_zeal_file(&*io, &args.palette_file)?;

    let sheet = TilesetDecoder::new(args.bpp, compressed).decode_sheet(&tileset, &palette).map_err(|e| {
        format!("Failed to decode \"{}\": {}", args.tileset_file.display(), e)
    })?;
    logger.status("Sheet", format!(
        "{}x{} pixel(s) from {} palette color(s) at {}",
        sheet.width, sheet.height, palette.len() / 2, args.bpp
    ));

    let output_file = args.output_file.unwrap_or_else(|| args.tileset_file.with_extension("gif"));
    logger.status("Writing", format!("{}", output_file.display()));
    util::output_binary(io, Some(output_file.as_path()), raster::save_gif(&sheet)?)
}
