//! Board compositor.
//! Takes a decoded board grid, the glyph set, and the render config and
//! produces the finished diagram image. Pure function of its inputs: the
//! same grid, glyphs, and config always yield byte-identical output.

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use thiserror::Error;

use crate::config::RenderConfig;
use crate::fen::{BoardGrid, Piece, BOARD_SIZE};
use crate::glyphs::GlyphSet;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no glyph loaded for {0}")]
pub struct MissingGlyph(pub Piece);

/// Renders one diagram.
///
/// The canvas is `8 * square_size` pixels on each side. With
/// `include_board` set, squares where `(rank + file)` is odd get the dark
/// color over a light base, which puts a light square at a8 (top left).
/// Without it the background stays fully transparent. Occupied squares get
/// their glyph resized to one square and alpha-composited on top.
///
/// Fails with [`MissingGlyph`] when the grid references an identity absent
/// from the glyph set; no partially drawn image is ever returned.
pub fn render(
    grid: &BoardGrid,
    glyphs: &GlyphSet,
    config: &RenderConfig,
) -> Result<RgbaImage, MissingGlyph> {
    let square = config.square_size;
    let edge = square * BOARD_SIZE as u32;

    let background = if config.include_board {
        config.light_square_color
    } else {
        Rgba([0, 0, 0, 0])
    };
    let mut canvas = RgbaImage::from_pixel(edge, edge, background);

    if config.include_board {
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                if (rank + file) % 2 == 1 {
                    let rect = Rect::at(
                        (file as u32 * square) as i32,
                        (rank as u32 * square) as i32,
                    )
                    .of_size(square, square);
                    draw_filled_rect_mut(&mut canvas, rect, config.dark_square_color);
                }
            }
        }
    }

    for (rank, row) in grid.iter().enumerate() {
        for (file, cell) in row.iter().enumerate() {
            let Some(piece) = cell else {
                continue;
            };
            let glyph = glyphs.get(*piece).ok_or(MissingGlyph(*piece))?;
            let scaled = imageops::resize(glyph, square, square, imageops::FilterType::Lanczos3);
            imageops::overlay(
                &mut canvas,
                &scaled,
                file as i64 * square as i64,
                rank as i64 * square as i64,
            );
        }
    }

    Ok(canvas)
}
