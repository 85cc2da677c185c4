// External Dependencies ------------------------------------------------------
use clap::{Arg, Command};
use zeal_gfx::ScreenSize;


// CLI Definition -------------------------------------------------------------
pub fn app() -> Command<'static> {
    Command::new("ztool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts graphics and level data into Zeal 8-bit formats")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("silent")
            .long("silent")
            .global(true)
            .help("Suppresses all status output")
        )
        .arg(Arg::new("config")
            .long("config")
            .takes_value(true)
            .global(true)
            .help("Configuration file to load instead of zeal.toml")
        )
        .subcommand(Command::new("tileset")
            .about("converts an indexed gif image into a tileset, palette and tilemap")
            .arg(Arg::new("IMAGE_FILE")
                .help("Input gif image")
                .required(true)
                .index(1)
            )
            .arg(Arg::new("TILESET_FILE")
                .long("tileset")
                .short('t')
                .takes_value(true)
                .help("Tileset file to generate (.zts or compressed .zcts)")
            )
            .arg(Arg::new("PALETTE_FILE")
                .long("palette")
                .short('p')
                .takes_value(true)
                .help("Palette file to generate (.ztp)")
            )
            .arg(Arg::new("TILEMAP_FILE")
                .long("tilemap")
                .short('m')
                .takes_value(true)
                .help("Tilemap file to generate (.ztm), implies --generate-tilemap")
            )
            .arg(Arg::new("BPP")
                .long("bpp")
                .short('b')
                .takes_value(true)
                .possible_values(["auto", "1", "2", "4", "8"])
                .help("Bit depth of the generated tiles, detected from the color table by default")
            )
            .arg(Arg::new("COMPRESSION")
                .long("compression")
                .short('c')
                .takes_value(true)
                .possible_values(["none", "tile", "stream"])
                .help("Run-length encode every tile or the whole tileset")
            )
            .arg(Arg::new("MERGE")
                .long("merge")
                .help("Removes duplicate tiles, use with a tilemap to keep the layout")
            )
            .arg(Arg::new("GENERATE_TILEMAP")
                .long("generate-tilemap")
                .help("Generates a tilemap next to the image")
            )
        )
        .subcommand(Command::new("sheet")
            .about("renders a tileset and palette into a gif tile sheet")
            .arg(Arg::new("TILESET_FILE")
                .long("tileset")
                .short('t')
                .takes_value(true)
                .required(true)
                .help("Input tileset")
            )
            .arg(Arg::new("PALETTE_FILE")
                .long("palette")
                .short('p')
                .takes_value(true)
                .required(true)
                .help("Input palette")
            )
            .arg(Arg::new("OUTPUT_FILE")
                .long("out-file")
                .short('o')
                .takes_value(true)
                .help("Gif image to generate")
            )
            .arg(Arg::new("BPP")
                .long("bpp")
                .short('b')
                .takes_value(true)
                .possible_values(["1", "2", "4", "8"])
                .default_value("8")
                .help("Bit depth of the tileset")
            )
            .arg(Arg::new("COMPRESSED")
                .long("compressed")
                .short('c')
                .help("Tileset is run-length encoded, detected from a .zcts extension by default")
            )
        )
        .subcommand(Command::new("tilemap")
            .about("converts the layers of a Tiled map into tilemaps")
            .arg(Arg::new("MAP_FILE")
                .help("Input Tiled map (.tmx)")
                .required(true)
                .index(1)
            )
            .arg(Arg::new("OUTPUT_FILE")
                .long("out-file")
                .short('o')
                .takes_value(true)
                .help("Tilemap file to generate (.ztm or compressed .zctm)")
            )
            .arg(Arg::new("SCREEN")
                .long("screen")
                .short('s')
                .takes_value(true)
                .validator(is_screen_size)
                .help("Splits layers into screens of WIDTHxHEIGHT tiles")
            )
        )
        .subcommand(Command::new("compress")
            .about("run-length encodes a file")
            .arg(Arg::new("INPUT_FILE")
                .help("Input file (if none is provided STDIN is read)")
                .index(1)
            )
            .arg(Arg::new("INFO")
                .long("info")
                .help("Reports run statistics instead of writing data")
            )
            .arg(Arg::new("OUTPUT_FILE")
                .long("out-file")
                .short('o')
                .takes_value(true)
                .help("Compressed file to generate (if none is provided STDOUT is written)")
            )
        )
        .subcommand(Command::new("decompress")
            .about("expands a run-length encoded file")
            .arg(Arg::new("INPUT_FILE")
                .help("Input file (if none is provided STDIN is read)")
                .index(1)
            )
            .arg(Arg::new("OUTPUT_FILE")
                .long("out-file")
                .short('o')
                .takes_value(true)
                .help("Decompressed file to generate (if none is provided STDOUT is written)")
            )
        )
}


// Helpers --------------------------------------------------------------------
fn is_screen_size(value: &str) -> Result<(), String> {
    value.parse::<ScreenSize>().map(|_| ()).map_err(|e| e.to_string())
}
