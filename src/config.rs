// STD Dependencies -----------------------------------------------------------
use std::path::Path;


// External Dependencies ------------------------------------------------------
use serde::Deserialize;
use file_io::{FileReader, Logger};
use zeal_gfx::{BitDepth, Compression, ScreenSize, TilesetOptions};


// Statics --------------------------------------------------------------------
pub const DEFAULT_CONFIG_FILE: &str = "zeal.toml";


// Tool Configuration ---------------------------------------------------------
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    #[serde(default)]
    pub tileset: TilesetConfig,
    #[serde(default)]
    pub tilemap: TilemapConfig
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TilesetConfig {
    /// Forced bit depth, unset means automatic.
    pub bpp: Option<u8>,
    pub compression: Option<String>,
    #[serde(default)]
    pub merge: bool,
    #[serde(default)]
    pub tilemap: bool
}

impl TilesetConfig {
    pub fn options(&self) -> Result<TilesetOptions, String> {
        let bpp = match self.bpp {
            Some(bits) => Some(BitDepth::try_from(bits).map_err(|e| {
                format!("Invalid tileset configuration: {}", e)
            })?),
            None => None
        };
        let compression = match self.compression.as_ref() {
            Some(name) => name.parse::<Compression>()?,
            None => Compression::None
        };
        Ok(TilesetOptions {
            bpp,
            compression,
            merge: self.merge,
            tilemap: self.tilemap
        })
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TilemapConfig {
    /// Screen size in tiles as `[width, height]`.
    pub screen: Option<[usize; 2]>
}

impl TilemapConfig {
    pub fn screen(&self) -> Result<Option<ScreenSize>, String> {
        match self.screen {
            Some([w, h]) => ScreenSize::new(w, h).map(Some).map_err(|e| {
                format!("Invalid tilemap configuration: {}", e)
            }),
            None => Ok(None)
        }
    }
}

impl ToolConfig {

    /// Loads an explicitly requested configuration file, or `zeal.toml` from
    /// the working directory when it exists.
    pub fn load<R: FileReader>(logger: &mut Logger, reader: &R, file: Option<&Path>) -> Result<ToolConfig, String> {
        let file = match file {
            Some(file) => file,
            None if reader.exists(Path::new(DEFAULT_CONFIG_FILE)) => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(ToolConfig::default())
        };

        let text = reader.read_file(file).map_err(|e| {
            format!("Failed to read configuration file {}", e)
        })?;
        let config = Self::from_toml(&text).map_err(|e| {
            format!("Failed to parse configuration file \"{}\": {}", file.display(), e)
        })?;
        logger.info(format!("Loaded configuration from {}", file.display()));
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<ToolConfig, String> {
        let config = toml::from_str::<ToolConfig>(text).map_err(|e| e.to_string())?;

        // Validate eagerly so bad values are reported with the file name
        config.tileset.options()?;
        config.tilemap.screen()?;
        Ok(config)
    }

}
