// ============================================================
// Layer 6 — Board Renderer
// ============================================================
// Draws the piece placement of a FEN as a PNG bitmap.
//
//   8 × 8 squares of 48 px, rank 8 at the top
//   light / dark squares in the usual wood colours
//   each piece: a filled disc in its side's colour with a
//               5 × 7 letter (K Q R B N P) drawn at 4× scale
//               in the opposite colour
//
// Only the piece placement is drawn; side to move, castling
// rights and counters are not shown. A FEN that does not
// describe a legal position is an error.
//
// Reference: image crate documentation (RgbImage, ImageBuffer::save)

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use crate::domain::piece::{PieceKind, Side};
use crate::infra::rules::BoardView;

const LIGHT: Rgb<u8> = Rgb([240, 217, 181]);
const DARK:  Rgb<u8> = Rgb([181, 136, 99]);
const WHITE: Rgb<u8> = Rgb([248, 248, 248]);
const BLACK: Rgb<u8> = Rgb([32, 32, 32]);

/// Letter scale factor (5 × 7 glyph → 20 × 28 px)
const GLYPH_SCALE: u32 = 4;

/// 5 × 7 glyphs, one row per byte, most significant of the low
/// five bits is the leftmost pixel.
fn glyph(piece: PieceKind) -> [u8; 7] {
    match piece {
        PieceKind::King   => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        PieceKind::Queen  => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        PieceKind::Rook   => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        PieceKind::Bishop => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        PieceKind::Knight => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        PieceKind::Pawn   => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
    }
}

#[derive(Debug, Clone)]
pub struct BoardRenderer {
    square_px: u32,
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self { square_px: 48 }
    }
}

impl BoardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the whole image in pixels
    pub fn size(&self) -> u32 {
        self.square_px * 8
    }

    pub fn render(&self, fen: &str) -> Result<RgbImage> {
        let board   = BoardView::from_fen(fen).context("Cannot render board")?;
        let mut img = RgbImage::new(self.size(), self.size());

        for id in 0..64u8 {
            let file = u32::from(id % 8);
            let rank = u32::from(id / 8);
            let x0   = file * self.square_px;
            let y0   = (7 - rank) * self.square_px;

            let colour = if (file + rank) % 2 == 0 { DARK } else { LIGHT };
            self.fill_square(&mut img, x0, y0, colour);

            if let Some((side, piece)) = board.piece_at(id) {
                let (fill, ink) = match side {
                    Side::White => (WHITE, BLACK),
                    Side::Black => (BLACK, WHITE),
                };
                self.draw_disc(&mut img, x0, y0, fill, ink);
                self.draw_glyph(&mut img, x0, y0, glyph(piece), ink);
            }
        }

        Ok(img)
    }

    /// Render and save as PNG.
    pub fn render_to(&self, fen: &str, path: &Path) -> Result<()> {
        self.render(fen)?
            .save(path)
            .with_context(|| format!("Cannot write board image '{}'", path.display()))
    }

    fn fill_square(&self, img: &mut RgbImage, x0: u32, y0: u32, colour: Rgb<u8>) {
        for y in y0..y0 + self.square_px {
            for x in x0..x0 + self.square_px {
                img.put_pixel(x, y, colour);
            }
        }
    }

    /// Filled disc with a 2 px rim in the ink colour
    fn draw_disc(&self, img: &mut RgbImage, x0: u32, y0: u32, fill: Rgb<u8>, ink: Rgb<u8>) {
        let centre = self.square_px as i64 / 2;
        let radius = centre - 6;

        for dy in 0..self.square_px as i64 {
            for dx in 0..self.square_px as i64 {
                let d2 = (dx - centre).pow(2) + (dy - centre).pow(2);
                if d2 > radius * radius {
                    continue;
                }
                let colour = if d2 >= (radius - 2) * (radius - 2) { ink } else { fill };
                img.put_pixel(x0 + dx as u32, y0 + dy as u32, colour);
            }
        }
    }

    fn draw_glyph(&self, img: &mut RgbImage, x0: u32, y0: u32, rows: [u8; 7], ink: Rgb<u8>) {
        let left = x0 + (self.square_px - 5 * GLYPH_SCALE) / 2;
        let top  = y0 + (self.square_px - 7 * GLYPH_SCALE) / 2;

        for (r, bits) in rows.iter().enumerate() {
            for c in 0..5u32 {
                if bits & (0b10000 >> c) == 0 {
                    continue;
                }
                for py in 0..GLYPH_SCALE {
                    for px in 0..GLYPH_SCALE {
                        img.put_pixel(left + c * GLYPH_SCALE + px, top + r as u32 * GLYPH_SCALE + py, ink);
                    }
                }
            }
        }
    }
}
