// STD Dependencies -----------------------------------------------------------
use std::path::PathBuf;


// External Dependencies ------------------------------------------------------
use file_io::{FileReader, FileWriter, Logger};
use zeal_gfx::{screen, tilemap, ScreenSize, WorldGrid};


// Internal Dependencies ------------------------------------------------------
use crate::config::ToolConfig;
use crate::format::{self, FileKind, ZealFormat};
use crate::tiled::Map;
use crate::util;


// Arguments ------------------------------------------------------------------
#[derive(Debug, Default)]
pub struct TilemapArgs {
    pub map_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub screen: Option<ScreenSize>
}


// Level Editor to Tilemap Conversion -----------------------------------------
pub fn convert<IO: FileReader + FileWriter>(
    logger: &mut Logger,
    io: &mut IO,
    config: &ToolConfig,
    args: TilemapArgs

) -> Result<(), String> {

    let screen_size = match args.screen {
        Some(size) => Some(size),
        None => config.tilemap.screen()?
    };

    let text = io.read_file(&args.map_file).map_err(|e| {
        format!("Failed to load map file {}", e)
    })?;
    let map = Map::from_string(&text)?;
    if map.layers.is_empty() {
        return Err(format!("Map \"{}\" contains no tile layers", args.map_file.display()));
    }
    log::debug!("Map of {}x{} tile(s) with {} layer(s)", map.width, map.height, map.layers.len());

    let output_file = args.output_file.unwrap_or_else(|| {
        ZealFormat::new(FileKind::Tilemap, false).sibling_of(&args.map_file)
    });

    let multiple_layers = map.layers.len() > 1;
    for (layer_index, layer) in map.layers.iter().enumerate() {
        let failed = |e: zeal_gfx::ZealError| {
            format!("Failed to convert layer \"{}\": {}", layer.name, e)
        };
        let indices = layer.indices().map_err(failed)?;
        let cells = tilemap::from_external_indices(&indices).map_err(failed)?;
        let grid = WorldGrid::new(layer.width, layer.height, cells).map_err(failed)?;

        let screens = screen::split(&grid, screen_size).map_err(failed)?;
        if screens.is_empty() {
            logger.warning(format!(
                "Layer \"{}\" of {}x{} tile(s) is smaller than a single screen",
                layer.name, layer.width, layer.height
            ));
        }
        logger.status("Layer", format!(
            "\"{}\" {}x{} tile(s) into {} screen(s)",
            layer.name, layer.width, layer.height, screens.len()
        ));

        let multiple_screens = screens.len() > 1;
        for (screen_index, cells) in screens.into_iter().enumerate() {
            let mut suffix = Vec::new();
            if multiple_layers {
                suffix.push(layer_index);
            }
            if multiple_screens {
                suffix.push(screen_index);
            }
            let file = format::numbered(&output_file, &suffix);
            logger.status("Writing", format!("{}", file.display()));
            util::save_zeal_file(io, &file, cells)?;
        }
    }
    Ok(())
}
