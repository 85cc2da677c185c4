// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::str::FromStr;


// Internal Dependencies ------------------------------------------------------
use crate::error::ZealError;


// World Grid -----------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>
}

impl WorldGrid {

    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, ZealError> {
        let grid = Self {
            width,
            height,
            cells
        };
        grid.validate()?;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn validate(&self) -> Result<(), ZealError> {
        if self.cells.len() != self.width * self.height {
            Err(ZealError::InvalidDimensions(format!(
                "Grid of {}x{} tile(s) contains {} cell(s)",
                self.width, self.height, self.cells.len()
            )))

        } else {
            Ok(())
        }
    }

}


// Screen Size ----------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    width: usize,
    height: usize
}

impl ScreenSize {

    pub fn new(width: usize, height: usize) -> Result<Self, ZealError> {
        if width == 0 || height == 0 {
            Err(ZealError::InvalidDimensions(format!("Screen size of {}x{} tile(s) must not be empty", width, height)))

        } else {
            Ok(Self {
                width,
                height
            })
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

}

impl FromStr for ScreenSize {
    type Err = ZealError;

    /// Parses `WIDTHxHEIGHT`, e.g. `20x15`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ZealError::InvalidDimensions(format!("Screen size \"{}\" must be of the form WIDTHxHEIGHT", s));
        let (w, h) = s.split_once(|c| c == 'x' || c == 'X').ok_or_else(invalid)?;
        let w = w.trim().parse().map_err(|_| invalid())?;
        let h = h.trim().parse().map_err(|_| invalid())?;
        ScreenSize::new(w, h)
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}


// Screen Splitting -----------------------------------------------------------
pub type Screen = Vec<u8>;

/// Cuts the grid into screens in row-major screen order. Rows and columns
/// that do not fill a whole screen are dropped. Without a screen size the
/// whole grid is a single screen.
pub fn split(grid: &WorldGrid, screen: Option<ScreenSize>) -> Result<Vec<Screen>, ZealError> {
    grid.validate()?;
    let screen = match screen {
        Some(screen) => screen,
        None => return Ok(vec![grid.cells.clone()])
    };

    let (sw, sh) = (screen.width, screen.height);
    let columns = grid.width / sw;
    let rows = grid.height / sh;
    if grid.width % sw != 0 || grid.height % sh != 0 {
        log::debug!(
            "Grid of {}x{} is not a multiple of {}, dropping {} column(s) and {} row(s)",
            grid.width, grid.height, screen, grid.width % sw, grid.height % sh
        );
    }

    let mut screens = Vec::with_capacity(columns * rows);
    for screen_row in 0..rows {
        for screen_col in 0..columns {
            let origin = screen_row * sh * grid.width + screen_col * sw;
            let mut cells = Vec::with_capacity(sw * sh);
            for y in 0..sh {
                let start = origin + y * grid.width;
                cells.extend_from_slice(&grid.cells[start..start + sw]);
            }
            screens.push(cells);
        }
    }
    Ok(screens)
}
