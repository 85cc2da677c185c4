// External Dependencies ------------------------------------------------------
use serde::Deserialize;
use zeal_gfx::ZealError;


// Statics --------------------------------------------------------------------

/// Tiled stores horizontal, vertical and diagonal flips in the top bits of
/// every global tile id.
const GID_FLIP_MASK: u32 = 0x1FFF_FFFF;


// Tiled XML Structs ----------------------------------------------------------
#[derive(Deserialize, Debug)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    #[serde(rename="layer", default)]
    pub layers: Vec<Layer>
}

impl Map {
    pub fn from_string(text: &str) -> Result<Self, String> {
        serde_xml_rs::from_str(text).map_err(|e| {
            format!("Failed to parse Tiled map: {}", e)
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct Layer {
    #[serde(default)]
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub data: Data
}

#[derive(Deserialize, Debug)]
pub struct Data {
    pub encoding: Option<String>,
    pub compression: Option<String>,
    #[serde(rename="$value", default)]
    pub text: String
}


// Layer Decoding -------------------------------------------------------------
impl Layer {

    /// Returns the flat, row-major list of 1-based tile indices.
    pub fn indices(&self) -> Result<Vec<i64>, ZealError> {
        let data = &self.data;
        if let Some(compression) = data.compression.as_ref() {
            return Err(ZealError::InvalidEncoding(format!(
                "layer \"{}\" uses {} compression, only uncompressed data is supported",
                self.name, compression
            )));
        }

        let indices = match data.encoding.as_deref() {
            Some("csv") => Self::parse_csv(&data.text)?,
            Some("base64") => Self::parse_base64(&data.text)?,
            Some(other) => return Err(ZealError::InvalidEncoding(format!(
                "layer \"{}\" uses {} encoding, expected csv or base64",
                self.name, other
            ))),
            None => return Err(ZealError::InvalidEncoding(format!(
                "layer \"{}\" stores tiles as XML elements, expected csv or base64",
                self.name
            )))
        };

        if indices.len() != self.width * self.height {
            return Err(ZealError::InvalidDimensions(format!(
                "layer \"{}\" of {}x{} tile(s) contains {} tile(s)",
                self.name, self.width, self.height, indices.len()
            )));
        }
        Ok(indices)
    }

    fn parse_csv(text: &str) -> Result<Vec<i64>, ZealError> {
        text.split(',').map(str::trim).filter(|v| !v.is_empty()).map(|v| {
            let gid: u32 = v.parse().map_err(|_| {
                ZealError::InvalidEncoding(format!("\"{}\" is not a 32-bit tile id", v))
            })?;
            Ok((gid & GID_FLIP_MASK) as i64)

        }).collect()
    }

    fn parse_base64(text: &str) -> Result<Vec<i64>, ZealError> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = base64::decode(&compact).map_err(|e| {
            ZealError::InvalidEncoding(format!("invalid base64 data: {}", e))
        })?;
        if bytes.len() % 4 != 0 {
            return Err(ZealError::InvalidEncoding(format!("base64 data of {} byte(s) is not a list of 32-bit tile ids", bytes.len())));
        }
        Ok(bytes.chunks(4).map(|c| {
            (u32::from_le_bytes([c[0], c[1], c[2], c[3]]) & GID_FLIP_MASK) as i64

        }).collect())
    }

}
