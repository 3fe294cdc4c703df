//! PNG export of tile matrices as colour-coded tile maps

use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::spatial::grid::TileMatrix;
use crate::spatial::tiles::{TILE_COUNT, TileId};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Fill colour for each tile, indexed by `id - 1`
pub const TILE_PALETTE: [[u8; 4]; TILE_COUNT] = [
    [32, 32, 32, 255],
    [230, 25, 75, 255],
    [60, 180, 75, 255],
    [255, 225, 25, 255],
    [0, 130, 200, 255],
    [245, 130, 48, 255],
    [145, 30, 180, 255],
    [70, 240, 240, 255],
    [240, 50, 230, 255],
    [210, 245, 60, 255],
    [250, 190, 212, 255],
    [0, 128, 128, 255],
    [220, 190, 255, 255],
    [170, 110, 40, 255],
    [255, 250, 200, 255],
    [128, 0, 0, 255],
];

/// Colour used for a tile in the tile map
///
/// # Errors
///
/// Returns `InvalidTileIndex` for identifiers outside the catalog
pub fn tile_color(tile: TileId) -> Result<Rgba<u8>> {
    usize::from(tile)
        .checked_sub(1)
        .and_then(|index| TILE_PALETTE.get(index))
        .map(|&rgba| Rgba(rgba))
        .ok_or(KolamError::InvalidTileIndex {
            index: usize::from(tile),
            max_tiles: TILE_COUNT,
        })
}

/// Export the matrix as a PNG with one `cell_pixels` square per tile
///
/// Rows are written top to bottom in solver order.
///
/// # Errors
///
/// Returns an error if:
/// - The matrix is empty or `cell_pixels` is zero
/// - A tile identifier is outside the catalog
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tile_map_png(
    matrix: &TileMatrix,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"must be positive",
        ));
    }
    if matrix.rows() == 0 || matrix.cols() == 0 {
        return Err(invalid_parameter(
            "matrix",
            &format!("{}x{}", matrix.rows(), matrix.cols()),
            &"must contain at least one tile",
        ));
    }

    let width = matrix.cols() as u32 * cell_pixels;
    let height = matrix.rows() as u32 * cell_pixels;
    let mut img = ImageBuffer::new(width, height);

    for ((row, col), &tile) in matrix.cells().indexed_iter() {
        let color = tile_color(tile)?;
        let left = col as u32 * cell_pixels;
        let top = row as u32 * cell_pixels;
        for dy in 0..cell_pixels {
            for dx in 0..cell_pixels {
                img.put_pixel(left + dx, top + dy, color);
            }
        }
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| KolamError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
