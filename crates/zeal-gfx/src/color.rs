// Internal Dependencies ------------------------------------------------------
use crate::error::ZealError;


// Statics --------------------------------------------------------------------
pub const MAX_COLORS: usize = 256;


// RGB565 Conversion ----------------------------------------------------------
pub type Rgb = [u8; 3];

/// Truncates a 24-bit color into RGB565.
pub fn to16(r: u8, g: u8, b: u8) -> u16 {
    let red = (r as u16 >> 3) & 0x1F;
    let green = (g as u16 >> 2) & 0x3F;
    let blue = (b as u16 >> 3) & 0x1F;
    (red << 11) | (green << 5) | blue
}

/// Expands a RGB565 color back into 8 bits per channel, rounding to the
/// nearest representable value.
pub fn from16(value: u16) -> (u8, u8, u8) {
    let red = (value >> 11) & 0x1F;
    let green = (value >> 5) & 0x3F;
    let blue = value & 0x1F;
    (
        expand(red, 31),
        expand(green, 63),
        expand(blue, 31)
    )
}

fn expand(value: u16, divisor: u16) -> u8 {
    ((value as u32 * 255 + divisor as u32 / 2) / divisor as u32) as u8
}


// Palette --------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<u16>
}

impl Palette {

    /// Converts the first `budget` entries of a source color table, in order.
    pub fn from_rgb(table: &[Rgb], budget: usize) -> Result<Self, ZealError> {
        if table.is_empty() {
            return Err(ZealError::InvalidColorMode("color table is empty".to_string()));
        }
        let budget = budget.min(MAX_COLORS);
        if table.len() > budget {
            log::debug!("Palette budget of {} color(s) drops {} source color(s)", budget, table.len() - budget);
        }
        Ok(Self {
            colors: table.iter().take(budget).map(|c| to16(c[0], c[1], c[2])).collect()
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ZealError> {
        if bytes.len() % 2 != 0 {
            return Err(ZealError::truncated("Palette stream", bytes.len() - 1));

        } else if bytes.len() > MAX_COLORS * 2 {
            return Err(ZealError::size_mismatch("Palette stream", MAX_COLORS * 2, bytes.len()));
        }
        Ok(Self {
            colors: bytes.chunks(2).map(|c| u16::from_le_bytes([c[0], c[1]])).collect()
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.colors.len() * 2);
        for color in &self.colors {
            bytes.extend_from_slice(&color.to_le_bytes());
        }
        bytes
    }

    pub fn to_rgb(&self) -> Vec<Rgb> {
        self.colors.iter().map(|c| {
            let (r, g, b) = from16(*c);
            [r, g, b]

        }).collect()
    }

    pub fn colors(&self) -> &[u16] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

}


#[cfg(test)]
mod test {

    use super::{from16, to16, Palette};
    use crate::error::ZealError;

    #[test]
    fn test_to16_packing() {
        assert_eq!(to16(0, 0, 0), 0x0000);
        assert_eq!(to16(255, 255, 255), 0xFFFF);
        assert_eq!(to16(255, 0, 0), 0xF800);
        assert_eq!(to16(0, 255, 0), 0x07E0);
        assert_eq!(to16(0, 0, 255), 0x001F);
        // Low bits are truncated, not rounded
        assert_eq!(to16(7, 3, 7), 0x0000);
        assert_eq!(to16(8, 4, 8), 0x0821);
    }

    #[test]
    fn test_from16_rounding() {
        assert_eq!(from16(0x0000), (0, 0, 0));
        assert_eq!(from16(0xFFFF), (255, 255, 255));
        assert_eq!(from16(0xF800), (255, 0, 0));
        // 1 * 255 / 31 = 8.23, 1 * 255 / 63 = 4.05
        assert_eq!(from16(0x0821), (8, 4, 8));
        // 16 * 255 / 31 = 131.6, 32 * 255 / 63 = 129.5
        assert_eq!(from16(0x8400 | 0x0010), (132, 130, 132));
    }

    #[test]
    fn test_round_trip_error_bounds() {
        // Truncation on the way in makes the worst case a full quantization
        // step: 7 for the 5-bit channels and 3 for the 6-bit channel.
        let (mut max_r, mut max_g, mut max_b) = (0, 0, 0);
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in (0..=255u8).step_by(17) {
                    let (dr, dg, db) = from16(to16(r, g, b));
                    max_r = max_r.max((dr as i16 - r as i16).abs());
                    max_g = max_g.max((dg as i16 - g as i16).abs());
                    max_b = max_b.max((db as i16 - b as i16).abs());
                }
            }
        }
        assert!(max_r <= 7, "red error {}", max_r);
        assert!(max_g <= 3, "green error {}", max_g);
        assert!(max_b <= 7, "blue error {}", max_b);
    }

    #[test]
    fn test_expansion_is_stable() {
        for value in 0..=u16::MAX {
            let (r, g, b) = from16(value);
            assert_eq!(to16(r, g, b), value);
        }
    }

    #[test]
    fn test_palette_budget_keeps_source_order() {
        let table = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]];
        let palette = Palette::from_rgb(&table, 2).unwrap();
        assert_eq!(palette.colors(), &[0xF800, 0x07E0]);
        assert_eq!(palette.to_bytes(), vec![0x00, 0xF8, 0xE0, 0x07]);

        let palette = Palette::from_rgb(&table, 256).unwrap();
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn test_palette_empty_table() {
        assert!(matches!(Palette::from_rgb(&[], 16), Err(ZealError::InvalidColorMode(_))));
    }

    #[test]
    fn test_palette_bytes() {
        let palette = Palette::from_bytes(&[0x1F, 0x00, 0xE0, 0x07]).unwrap();
        assert_eq!(palette.to_rgb(), vec![[0, 0, 255], [0, 255, 0]]);
        assert_eq!(
            Palette::from_bytes(&[0x1F, 0x00, 0xE0]),
            Err(ZealError::truncated("Palette stream", 2))
        );
        assert_eq!(
            Palette::from_bytes(&[0; 514]),
            Err(ZealError::size_mismatch("Palette stream", 512, 514))
        );
    }

}
