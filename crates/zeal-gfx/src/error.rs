// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::error::Error;


// Codec Error Abstraction ----------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZealError {
    /// The source image has no usable indexed color table.
    InvalidColorMode(String),
    /// Level editor layer data is not a flat list of integer tile indices.
    InvalidEncoding(String),
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize
    },
    /// A compressed or packed stream ended in the middle of a run or tile.
    TruncatedStream {
        what: &'static str,
        offset: usize
    },
    UnsupportedBitDepth(u8),
    InvalidDimensions(String),
    TooManyTiles {
        count: usize,
        max: usize
    },
    IndexOutOfRange {
        index: i64,
        position: usize
    }
}

impl ZealError {

    pub fn size_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        ZealError::SizeMismatch {
            what,
            expected,
            actual
        }
    }

    pub fn truncated(what: &'static str, offset: usize) -> Self {
        ZealError::TruncatedStream {
            what,
            offset
        }
    }

}

impl fmt::Display for ZealError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZealError::InvalidColorMode(message) => {
                write!(f, "Invalid color mode, an indexed color table is required: {}", message)
            },
            ZealError::InvalidEncoding(message) => {
                write!(f, "Invalid layer data encoding: {}", message)
            },
            ZealError::SizeMismatch { what, expected, actual } => {
                write!(f, "{} has a length of {} byte(s), expected {}", what, actual, expected)
            },
            ZealError::TruncatedStream { what, offset } => {
                write!(f, "{} ends unexpectedly at offset {}", what, offset)
            },
            ZealError::UnsupportedBitDepth(bpp) => {
                write!(f, "Unsupported bit depth of {} (expected 1, 2, 4 or 8)", bpp)
            },
            ZealError::InvalidDimensions(message) => {
                write!(f, "Invalid dimensions: {}", message)
            },
            ZealError::TooManyTiles { count, max } => {
                write!(f, "Tileset contains {} unique tile(s), a tilemap can only address {}", count, max)
            },
            ZealError::IndexOutOfRange { index, position } => {
                write!(f, "Tile index {} at position {} does not fit into a tilemap byte", index, position)
            }
        }
    }
}

impl Error for ZealError {}


#[cfg(test)]
mod test {

    use super::ZealError;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ZealError::size_mismatch("Tile", 256, 12).to_string(),
            "Tile has a length of 12 byte(s), expected 256"
        );
        assert_eq!(
            ZealError::truncated("RLE stream", 7).to_string(),
            "RLE stream ends unexpectedly at offset 7"
        );
        assert_eq!(
            ZealError::UnsupportedBitDepth(3).to_string(),
            "Unsupported bit depth of 3 (expected 1, 2, 4 or 8)"
        );
    }

}
