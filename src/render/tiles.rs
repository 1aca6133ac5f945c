//! Tile asset loading.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use super::RenderError;
use crate::core::Cell;

/******************************************\
|==========================================|
|                 Tile Set                 |
|==========================================|
\******************************************/

/// The 13 square images (12 pieces plus the empty square), one per [`Cell`]
/// variant, looked up by the cell's asset name.
#[derive(Debug)]
pub struct TileSet {
    tiles: Vec<RgbaImage>,
}

impl TileSet {
    /// Loads `<dir>/<asset_key>.png` for every cell variant, resizing each
    /// tile to the given edge length.
    pub fn load(dir: &Path, tile_size: u32) -> Result<Self, RenderError> {
        let mut tiles = Vec::with_capacity(Cell::NUM);

        for cell in Cell::iter() {
            let path = dir.join(format!("{}.png", cell.asset_key()));
            let img = image::open(&path)
                .map_err(|source| RenderError::Tile { path, source })?
                .to_rgba8();
            tiles.push(imageops::resize(&img, tile_size, tile_size, FilterType::Triangle));
        }

        Ok(TileSet { tiles })
    }

    /// Returns the tile image for a cell
    #[inline]
    pub fn tile(&self, cell: Cell) -> &RgbaImage {
        &self.tiles[cell.index()]
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
