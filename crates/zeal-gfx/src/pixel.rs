// STD Dependencies -----------------------------------------------------------
use std::fmt;


// Internal Dependencies ------------------------------------------------------
use crate::error::ZealError;
use crate::tiles::{Tile, TILE_PIXELS};


// Bit Depth ------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    One,
    Two,
    Four,
    Eight
}

impl BitDepth {

    pub fn bits(self) -> usize {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
            BitDepth::Four => 4,
            BitDepth::Eight => 8
        }
    }

    /// Number of colors addressable by a single pixel.
    pub fn colors(self) -> usize {
        1 << self.bits()
    }

    pub fn pixels_per_byte(self) -> usize {
        8 / self.bits()
    }

    /// Size of one packed 16x16 tile in bytes.
    pub fn tile_size(self) -> usize {
        TILE_PIXELS * self.bits() / 8
    }

    /// Smallest depth able to address `colors` palette entries.
    pub fn for_color_count(colors: usize) -> Self {
        if colors <= 2 {
            BitDepth::One

        } else if colors <= 4 {
            BitDepth::Two

        } else if colors <= 16 {
            BitDepth::Four

        } else {
            BitDepth::Eight
        }
    }

}

impl TryFrom<u8> for BitDepth {
    type Error = ZealError;

    fn try_from(bpp: u8) -> Result<Self, Self::Error> {
        match bpp {
            1 => Ok(BitDepth::One),
            2 => Ok(BitDepth::Two),
            4 => Ok(BitDepth::Four),
            8 => Ok(BitDepth::Eight),
            _ => Err(ZealError::UnsupportedBitDepth(bpp))
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}bpp", self.bits())
    }
}


// Pixel Packing --------------------------------------------------------------

/// Packs a tile of palette indices, first pixel into the most significant
/// bits of each byte. Pixels wider than the depth lose their upper bits.
pub fn pack(tile: &[u8], bpp: BitDepth) -> Result<Vec<u8>, ZealError> {
    if tile.len() != TILE_PIXELS {
        return Err(ZealError::size_mismatch("Tile", TILE_PIXELS, tile.len()));
    }

    let bits = bpp.bits();
    let mask = (bpp.colors() - 1) as u8;
    let mut packed = Vec::with_capacity(bpp.tile_size());
    for pixels in tile.chunks(bpp.pixels_per_byte()) {
        let mut byte = 0u8;
        for (i, pixel) in pixels.iter().enumerate() {
            byte |= (pixel & mask) << (8 - bits * (i + 1));
        }
        packed.push(byte);
    }
    Ok(packed)
}

pub fn unpack(data: &[u8], bpp: BitDepth) -> Result<Tile, ZealError> {
    if data.len() != bpp.tile_size() {
        return Err(ZealError::size_mismatch("Packed tile", bpp.tile_size(), data.len()));
    }

    let bits = bpp.bits();
    let mask = (bpp.colors() - 1) as u8;
    let mut tile = [0; TILE_PIXELS];
    let mut index = 0;
    for byte in data {
        for i in 0..bpp.pixels_per_byte() {
            tile[index] = (byte >> (8 - bits * (i + 1))) & mask;
            index += 1;
        }
    }
    Ok(tile)
}


#[cfg(test)]
mod test {

    use super::{pack, unpack, BitDepth};
    use crate::error::ZealError;
    use crate::tiles::TILE_PIXELS;

    const DEPTHS: [BitDepth; 4] = [BitDepth::One, BitDepth::Two, BitDepth::Four, BitDepth::Eight];

    fn tile_from(pattern: &[u8]) -> Vec<u8> {
        pattern.iter().cycle().take(TILE_PIXELS).cloned().collect()
    }

    macro_rules! test_pack {
        ($pattern:expr, $bpp:expr, $expected:expr) => {
            let packed = pack(&tile_from(&$pattern), $bpp).unwrap();
            assert_eq!(packed.len(), $bpp.tile_size());
            assert_eq!(&packed[..$expected.len()], &$expected[..]);
        }
    }

    #[test]
    fn test_bit_depth_from_u8() {
        assert_eq!(BitDepth::try_from(1), Ok(BitDepth::One));
        assert_eq!(BitDepth::try_from(2), Ok(BitDepth::Two));
        assert_eq!(BitDepth::try_from(4), Ok(BitDepth::Four));
        assert_eq!(BitDepth::try_from(8), Ok(BitDepth::Eight));
        assert_eq!(BitDepth::try_from(3), Err(ZealError::UnsupportedBitDepth(3)));
        assert_eq!(BitDepth::try_from(16), Err(ZealError::UnsupportedBitDepth(16)));
    }

    #[test]
    fn test_bit_depth_sizes() {
        assert_eq!(BitDepth::One.tile_size(), 32);
        assert_eq!(BitDepth::Two.tile_size(), 64);
        assert_eq!(BitDepth::Four.tile_size(), 128);
        assert_eq!(BitDepth::Eight.tile_size(), 256);
        assert_eq!(BitDepth::for_color_count(2), BitDepth::One);
        assert_eq!(BitDepth::for_color_count(3), BitDepth::Two);
        assert_eq!(BitDepth::for_color_count(16), BitDepth::Four);
        assert_eq!(BitDepth::for_color_count(17), BitDepth::Eight);
    }

    #[test]
    fn test_pack_8bpp_identity() {
        test_pack!([0, 17, 255, 3], BitDepth::Eight, [0, 17, 255, 3]);
    }

    #[test]
    fn test_pack_4bpp() {
        test_pack!([1, 2, 15, 0], BitDepth::Four, [0x12, 0xF0]);
        // Upper nibble is truncated
        test_pack!([0x31, 0x42], BitDepth::Four, [0x12]);
    }

    #[test]
    fn test_pack_2bpp() {
        test_pack!([3, 2, 1, 0], BitDepth::Two, [0b11_10_01_00]);
        test_pack!([0, 1, 2, 7], BitDepth::Two, [0b00_01_10_11]);
    }

    #[test]
    fn test_pack_1bpp() {
        test_pack!([1, 0, 0, 0, 0, 0, 0, 1], BitDepth::One, [0b1000_0001]);
        // Only the lowest bit is used
        test_pack!([2, 3, 0, 0, 0, 0, 0, 0], BitDepth::One, [0b0100_0000]);
    }

    #[test]
    fn test_unpack_bit_positions() {
        let mut data = vec![0; 32];
        data[0] = 0b1010_0000;
        let tile = unpack(&data, BitDepth::One).unwrap();
        assert_eq!(&tile[..8], &[1, 0, 1, 0, 0, 0, 0, 0]);

        let mut data = vec![0; 128];
        data[1] = 0xAB;
        let tile = unpack(&data, BitDepth::Four).unwrap();
        assert_eq!(&tile[..4], &[0, 0, 0xA, 0xB]);
    }

    #[test]
    fn test_round_trip_within_depth() {
        for bpp in DEPTHS.iter() {
            let tile: Vec<u8> = (0..TILE_PIXELS).map(|i| ((i * 7 + i / 16) % bpp.colors()) as u8).collect();
            let packed = pack(&tile, *bpp).unwrap();
            assert_eq!(&unpack(&packed, *bpp).unwrap()[..], &tile[..], "{}", bpp);
        }
    }

    #[test]
    fn test_size_mismatch() {
        assert_eq!(pack(&[0; 255], BitDepth::Eight), Err(ZealError::size_mismatch("Tile", 256, 255)));
        assert_eq!(unpack(&[0; 256], BitDepth::Four), Err(ZealError::size_mismatch("Packed tile", 128, 256)));
    }

}
