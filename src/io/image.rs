//! PNG rendering of complete tilings

use crate::algorithm::search::Solution;
use crate::io::error::{PuzzleError, Result, WithPath};
use crate::spatial::Location;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const OUTLINE: Rgba<u8> = Rgba([34, 34, 34, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Cycled by piece size
const PALETTE: [[u8; 4]; 9] = [
    [230, 25, 75, 255],
    [60, 180, 75, 255],
    [255, 225, 25, 255],
    [67, 99, 216, 255],
    [245, 130, 49, 255],
    [145, 30, 180, 255],
    [70, 240, 240, 255],
    [240, 50, 230, 255],
    [188, 246, 12, 255],
];

/// Fill colour for a piece of the given size
pub fn piece_color(size: usize) -> Rgba<u8> {
    let index = size.saturating_sub(1) % PALETTE.len();
    Rgba(PALETTE.get(index).copied().unwrap_or([0, 0, 0, 255]))
}

/// Draw a tiling with one outlined, size-coloured square per piece
///
/// The image is `width × cell_pixels` pixels square with the top grid row
/// first.
///
/// # Errors
///
/// Returns an error if:
/// - The grid holds no pieces
/// - A piece extends past the grid border
pub fn render_solution(solution: &Solution<'_>, cell_pixels: u32) -> Result<RgbaImage> {
    let width = solution.grid().width();
    let placements = solution.placements();
    if placements.is_empty() {
        return Err(PuzzleError::InvalidTiling {
            location: Location::ORIGIN,
            reason: "no squares to render",
        });
    }

    let side = width as u32 * cell_pixels;
    let mut img: RgbaImage = ImageBuffer::from_pixel(side, side, BACKGROUND);

    for placement in placements {
        let location = placement.location;
        let size = placement.size;
        if location.x + size > width || location.y + size > width {
            return Err(PuzzleError::InvalidTiling {
                location,
                reason: "square extends past the grid border",
            });
        }

        let color = piece_color(size);
        let left = location.x as u32 * cell_pixels;
        let top = (width - location.y - size) as u32 * cell_pixels;
        let extent = size as u32 * cell_pixels;

        for py in top..top + extent {
            for px in left..left + extent {
                let on_edge =
                    px == left || py == top || px == left + extent - 1 || py == top + extent - 1;
                img.put_pixel(px, py, if on_edge { OUTLINE } else { color });
            }
        }
    }

    Ok(img)
}

/// Render a tiling and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The tiling cannot be rendered
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_as_png(
    solution: &Solution<'_>,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_solution(solution, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
