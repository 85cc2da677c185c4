// STD Dependencies -----------------------------------------------------------
use std::path::PathBuf;


// External Dependencies ------------------------------------------------------
use file_io::{FileReader, FileWriter, Logger};
use zeal_gfx::rle;


// Internal Dependencies ------------------------------------------------------
use crate::util;


// Raw RLE Compressor ---------------------------------------------------------
pub fn compress<IO: FileReader + FileWriter>(
    logger: &mut Logger,
    io: &mut IO,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    info: bool

) -> Result<(), String> {
    let input_bytes = util::load_binary(&*io, input_file.as_deref())?;
    if info {
        let stats = rle::analyze(&input_bytes);
        logger.status("Literal", format!("{} run(s), {} byte(s)", stats.literal_runs, stats.literal_bytes));
        logger.status("Repeat", format!("{} run(s), {} byte(s)", stats.repeat_runs, stats.repeat_bytes));
        logger.status("Compressed", format!(
            "{} into {} byte(s) ({:.1}%)",
            stats.input_len, stats.output_len, stats.ratio() * 100.0
        ));
        Ok(())

    } else {
        let compressed = rle::encode(&input_bytes);
        log::debug!("Compressed {} byte(s) into {}", input_bytes.len(), compressed.len());
        util::output_binary(io, output_file.as_deref(), compressed)
    }
}

pub fn decompress<IO: FileReader + FileWriter>(
    io: &mut IO,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>

) -> Result<(), String> {
    let input_bytes = util::load_binary(&*io, input_file.as_deref())?;
    let bytes = rle::decode(&input_bytes).map_err(|e| {
        format!("Failed to decompress data: {}", e)
    })?;
    util::output_binary(io, output_file.as_deref(), bytes)
}
