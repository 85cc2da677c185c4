// STD Dependencies -----------------------------------------------------------
use std::path::{Path, PathBuf};
use std::process;


// External Dependencies ------------------------------------------------------
use clap::ArgMatches;
use file_io::{DiskIO, Logger};
use zeal_gfx::{Compression, ScreenSize};


// Modules --------------------------------------------------------------------
mod cli;
mod commands;
mod config;
mod format;
mod raster;
mod tiled;
mod util;

use commands::sheet::SheetArgs;
use commands::tilemap::TilemapArgs;
use commands::tileset::TilesetArgs;
use config::ToolConfig;


// CLI Interface --------------------------------------------------------------
fn main() {
    env_logger::Builder::new()
        .filter_module("ztool", log::LevelFilter::Info)
        .filter_module("zeal_gfx", log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let mut logger = Logger::new();
    let matches = cli::app().get_matches();
    let (name, matches) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => {
            cli::app().print_help().ok();
            process::exit(2);
        }
    };

    // Support Silent Flag for all Commands
    if matches.is_present("silent") {
        logger.set_silent();
    }

    if let Err(err) = run(&mut logger, name, matches) {
        logger.error(Logger::format_error(err));
        process::exit(1);
    }
    logger.flush();
}

fn run(logger: &mut Logger, name: &str, matches: &ArgMatches) -> Result<(), String> {
    let mut io = DiskIO::from_current_dir().map_err(|e| {
        format!("Failed to access working directory: {}", e)
    })?;
    let config = ToolConfig::load(logger, &io, matches.value_of("config").map(Path::new))?;

    match name {
        "tileset" => commands::tileset::convert(logger, &mut io, &config, TilesetArgs {
            image_file: required_path(matches, "IMAGE_FILE")?,
            tileset_file: optional_path(matches, "TILESET_FILE"),
            palette_file: optional_path(matches, "PALETTE_FILE"),
            tilemap_file: optional_path(matches, "TILEMAP_FILE"),
            bpp: matches.value_of("BPP").map(util::parse_bpp).transpose()?,
            compression: matches.value_of("COMPRESSION").map(|c| c.parse::<Compression>()).transpose()?,
            merge: matches.is_present("MERGE"),
            generate_tilemap: matches.is_present("GENERATE_TILEMAP")
        }),
        "sheet" => {
            let bpp = util::parse_bpp(matches.value_of("BPP").unwrap_or("8"))?.ok_or_else(|| {
                "Sheets require an explicit bit depth".to_string()
            })?;
            commands::sheet::convert(logger, &mut io, SheetArgs {
                tileset_file: required_path(matches, "TILESET_FILE")?,
                palette_file: required_path(matches, "PALETTE_FILE")?,
                output_file: optional_path(matches, "OUTPUT_FILE"),
                bpp,
                compressed: if matches.is_present("COMPRESSED") { Some(true) } else { None }
            })
        },
        "tilemap" => commands::tilemap::convert(logger, &mut io, &config, TilemapArgs {
            map_file: required_path(matches, "MAP_FILE")?,
            output_file: optional_path(matches, "OUTPUT_FILE"),
            screen: matches.value_of("SCREEN").map(|s| s.parse::<ScreenSize>()).transpose().map_err(|e| e.to_string())?
        }),
        "compress" => commands::compress::compress(
            logger,
            &mut io,
            optional_path(matches, "INPUT_FILE"),
            optional_path(matches, "OUTPUT_FILE"),
            matches.is_present("INFO")
        ),
        "decompress" => commands::compress::decompress(
            &mut io,
            optional_path(matches, "INPUT_FILE"),
            optional_path(matches, "OUTPUT_FILE")
        ),
        _ => Err(format!("Unknown command \"{}\"", name))
    }
}


// Helpers --------------------------------------------------------------------
fn optional_path(matches: &ArgMatches, name: &str) -> Option<PathBuf> {
    matches.value_of(name).map(PathBuf::from)
}

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf, String> {
    optional_path(matches, name).ok_or_else(|| format!("Argument `{}` is required", name))
}
