// STD Dependencies -----------------------------------------------------------
use std::borrow::Cow;


// External Dependencies ------------------------------------------------------
use gif::{ColorOutput, DecodeOptions, Encoder, Frame};
use zeal_gfx::{IndexedImage, Rgb, ZealError};


// GIF Loading ----------------------------------------------------------------

/// Decodes the first frame of an indexed GIF, keeping the palette indices
/// as they are stored in the file.
pub fn load_gif(bytes: &[u8]) -> Result<IndexedImage, String> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes).map_err(|e| {
        format!("Failed to load gif image: {}", e)
    })?;

    let (width, height) = (decoder.width() as usize, decoder.height() as usize);
    let global_palette = decoder.global_palette().map(|p| p.to_vec());
    let frame = decoder.read_next_frame().map_err(|e| {
        format!("Failed to load gif frame: {}", e)
    })?.ok_or_else(|| "Gif image contains no frames".to_string())?;

    let table = frame.palette.clone().or(global_palette).ok_or_else(|| {
        ZealError::InvalidColorMode("gif image has neither a global nor a local color table".to_string()).to_string()
    })?;
    let colors: Vec<Rgb> = table.chunks(3).filter(|c| c.len() == 3).map(|c| [c[0], c[1], c[2]]).collect();

    // Frames may only cover part of the logical screen
    let (left, top) = (frame.left as usize, frame.top as usize);
    let (fw, fh) = (frame.width as usize, frame.height as usize);
    let mut pixels = vec![0; width * height];
    for y in 0..fh.min(height.saturating_sub(top)) {
        let columns = fw.min(width.saturating_sub(left));
        let row = (top + y) * width + left;
        pixels[row..row + columns].copy_from_slice(&frame.buffer[y * fw..y * fw + columns]);
    }
    log::debug!("Loaded {}x{} gif with {} color(s)", width, height, colors.len());

    IndexedImage::new(width, height, pixels, colors).map_err(|e| e.to_string())
}


// GIF Saving -----------------------------------------------------------------
pub fn save_gif(image: &IndexedImage) -> Result<Vec<u8>, String> {
    if image.width > u16::MAX as usize || image.height > u16::MAX as usize {
        return Err(ZealError::InvalidDimensions(format!(
            "{}x{} pixel(s) exceed the gif size limit",
            image.width, image.height
        )).to_string());
    }

    let palette: Vec<u8> = image.colors.iter().flat_map(|c| c.iter().cloned()).collect();
    let mut frame = Frame::default();
    frame.width = image.width as u16;
    frame.height = image.height as u16;
    frame.buffer = Cow::Borrowed(&image.pixels[..]);

    let mut bytes = Vec::new();
    {
        let mut encoder = Encoder::new(&mut bytes, frame.width, frame.height, &palette).map_err(|e| {
            format!("Failed to create gif image: {}", e)
        })?;
        encoder.write_frame(&frame).map_err(|e| {
            format!("Failed to write gif frame: {}", e)
        })?;
    }
    Ok(bytes)
}
