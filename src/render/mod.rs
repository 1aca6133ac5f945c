//! Board-to-image compositing.
//!
//! Maps every cell of a parsed [`Board`] to a square tile image and lays the
//! tiles over a light/dark checkerboard, producing one fixed-size RGBA image.

pub mod tiles;

pub use tiles::TileSet;

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};
use thiserror::Error;

use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|                  Theme                   |
|==========================================|
\******************************************/

/// Edge length of one square tile, in pixels.
pub const TILE_SIZE: u32 = 50;

/// Compile-time drawing configuration: tile size and square colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub tile_size: u32,
    pub light: Rgba<u8>,
    pub dark: Rgba<u8>,
}

impl Theme {
    /// The classic wooden colour scheme.
    pub const CLASSIC: Theme = Theme {
        tile_size: TILE_SIZE,
        light: Rgba([255, 206, 158, 255]),
        dark: Rgba([209, 139, 71, 255]),
    };

    /// Pixel edge length of the full board image.
    pub const fn board_size(&self) -> u32 {
        self.tile_size * Rank::NUM as u32
    }

    /// Background colour of the square at a display position
    /// (row 0 = rank 8, column 0 = file a). The top-left square is light.
    pub const fn square_colour(&self, row: usize, col: usize) -> Rgba<u8> {
        if (row + col) % 2 == 0 {
            self.light
        } else {
            self.dark
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::CLASSIC
    }
}

/******************************************\
|==========================================|
|               Render Errors              |
|==========================================|
\******************************************/

/// Errors from the image side of the pipeline: tile assets and output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A tile asset could not be read or decoded.
    #[error("Failed to load tile image {}", .path.display())]
    Tile {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The composited image could not be written.
    #[error("Failed to write image {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/******************************************\
|==========================================|
|               Compositing                |
|==========================================|
\******************************************/

/// Composites a board into a single image: 8×8 tiles over the checkerboard,
/// rank 8 at the top. Transparent tile pixels show the square colour through.
pub fn render(board: &Board, tiles: &TileSet, theme: &Theme) -> RgbaImage {
    let size = theme.board_size();
    let mut img = RgbaImage::new(size, size);

    for (row, rank) in Rank::iter().rev().enumerate() {
        for (col, file) in File::iter().enumerate() {
            let x = col as u32 * theme.tile_size;
            let y = row as u32 * theme.tile_size;

            fill_square(&mut img, x, y, theme.tile_size, theme.square_colour(row, col));

            let cell = board.on(Square::from_parts(file, rank));
            imageops::overlay(&mut img, tiles.tile(cell), x as i64, y as i64);
        }
    }

    img
}

/// Writes a composited image to disk, wrapping failures with the target path.
pub fn save(img: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    img.save(path).map_err(|source| RenderError::Save {
        path: path.to_path_buf(),
        source,
    })
}

fn fill_square(img: &mut RgbaImage, x: u32, y: u32, size: u32, colour: Rgba<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            img.put_pixel(x + dx, y + dy, colour);
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
