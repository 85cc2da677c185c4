// STD Dependencies -----------------------------------------------------------
use std::io::{stdin, stdout, Read, Write};
use std::path::Path;


// External Dependencies ------------------------------------------------------
use file_io::{FileReader, FileWriter};
use zeal_gfx::{rle, BitDepth};


// Internal Dependencies ------------------------------------------------------
use crate::format::ZealFormat;


// Helpers --------------------------------------------------------------------
pub fn load_binary<R: FileReader>(reader: &R, input_file: Option<&Path>) -> Result<Vec<u8>, String> {
    if let Some(file) = input_file {
        reader.read_binary_file(file).map_err(|e| {
            format!("Failed to load input file {}", e)
        })

    } else {
        let mut bytes = Vec::new();
        stdin().read_to_end(&mut bytes).map_err(|e| {
            format!("Failed to read input from stdin: {}", e)
        })?;
        Ok(bytes)
    }
}

pub fn output_binary<W: FileWriter>(writer: &mut W, output_file: Option<&Path>, bytes: Vec<u8>) -> Result<(), String> {
    if let Some(file) = output_file {
        writer.write_binary_file(file, bytes).map_err(|e| {
            format!("Failed to save Zeal data {}", e)
        })

    } else {
        stdout().write_all(&bytes).map_err(|_| {
            "Failed to write Zeal data to stdout".to_string()
        })
    }
}

/// Loads a Zeal file and expands it when its extension marks it as
/// compressed.
pub fn load_zeal_file<R: FileReader>(reader: &R, file: &Path) -> Result<Vec<u8>, String> {
    let bytes = load_binary(reader, Some(file))?;
    if ZealFormat::from_path(file).map(|f| f.compressed).unwrap_or(false) {
        rle::decode(&bytes).map_err(|e| {
            format!("Failed to decompress \"{}\": {}", file.display(), e)
        })

    } else {
        Ok(bytes)
    }
}

/// Writes a Zeal file, compressing it when its extension asks for it.
pub fn save_zeal_file<W: FileWriter>(writer: &mut W, file: &Path, bytes: Vec<u8>) -> Result<(), String> {
    let bytes = if ZealFormat::from_path(file).map(|f| f.compressed).unwrap_or(false) {
        rle::encode(&bytes)

    } else {
        bytes
    };
    output_binary(writer, Some(file), bytes)
}

/// Parses a `--bpp` value, `auto` yields `None`.
pub fn parse_bpp(value: &str) -> Result<Option<BitDepth>, String> {
    if value == "auto" {
        Ok(None)

    } else {
        let bits = value.parse::<u8>().map_err(|_| {
            format!("Bit depth \"{}\" must be auto, 1, 2, 4 or 8", value)
        })?;
        BitDepth::try_from(bits).map(Some).map_err(|e| e.to_string())
    }
}
