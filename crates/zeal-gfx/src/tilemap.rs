// Internal Dependencies ------------------------------------------------------
use crate::error::ZealError;


// Statics --------------------------------------------------------------------

/// Tilemap byte marking a cell without a tile.
pub const EMPTY_TILE: u8 = 0xFF;

/// Largest tileset a byte tilemap can address.
pub const MAX_MAPPED_TILES: usize = 256;


// Tilemap Conversion ---------------------------------------------------------

/// Converts 1-based level editor indices into tilemap bytes. Indices of 0 or
/// less become `EMPTY_TILE`.
pub fn from_external_indices(indices: &[i64]) -> Result<Vec<u8>, ZealError> {
    indices.iter().enumerate().map(|(position, index)| {
        if *index < 1 {
            Ok(EMPTY_TILE)

        } else if *index - 1 >= EMPTY_TILE as i64 {
            Err(ZealError::IndexOutOfRange {
                index: *index,
                position
            })

        } else {
            Ok((*index - 1) as u8)
        }

    }).collect()
}

/// Converts a tileset index map into tilemap bytes.
pub fn from_index_map(index_map: &[usize]) -> Result<Vec<u8>, ZealError> {
    let count = index_map.iter().max().map(|m| m + 1).unwrap_or(0);
    if count > MAX_MAPPED_TILES {
        Err(ZealError::TooManyTiles {
            count,
            max: MAX_MAPPED_TILES
        })

    } else {
        Ok(index_map.iter().map(|i| *i as u8).collect())
    }
}
