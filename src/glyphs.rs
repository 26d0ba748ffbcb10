//! Piece glyph assets.
//! Loads the piece PNGs from a folder once at startup, keyed by piece
//! identity via a fixed filename convention (e.g. `pawn_white.png`).
//! Immutable after load and shared read-only across all renders.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::fen::{Piece, PieceColor, PieceKind};

/// Fixed identity-to-filename table matching the asset naming convention.
pub fn glyph_filename(piece: Piece) -> &'static str {
    use PieceColor::*;
    use PieceKind::*;
    match (piece.color, piece.kind) {
        (White, Pawn) => "pawn_white.png",
        (White, Knight) => "knight_white.png",
        (White, Bishop) => "bishop_white.png",
        (White, Rook) => "rook_white.png",
        (White, Queen) => "queen_white.png",
        (White, King) => "king_white.png",
        (Black, Pawn) => "pawn_black.png",
        (Black, Knight) => "knight_black.png",
        (Black, Bishop) => "bishop_black.png",
        (Black, Rook) => "rook_black.png",
        (Black, Queen) => "queen_black.png",
        (Black, King) => "king_black.png",
    }
}

/// The loaded piece images for one run.
pub struct GlyphSet {
    glyphs: HashMap<Piece, RgbaImage>,
}

impl GlyphSet {
    /// Loads every piece PNG found in `folder`. Missing files are tolerated
    /// here; a position that actually needs an absent identity fails later
    /// at render time with a missing-glyph error. Unreadable files abort.
    pub fn load(folder: &Path) -> Result<GlyphSet> {
        let mut glyphs = HashMap::new();
        for piece in Piece::ALL {
            let path = folder.join(glyph_filename(piece));
            if !path.exists() {
                continue;
            }
            let img = image::open(&path)
                .with_context(|| format!("Failed to load glyph image {}", path.display()))?
                .to_rgba8();
            glyphs.insert(piece, img);
        }
        Ok(GlyphSet { glyphs })
    }

    /// Builds a glyph set from already-decoded images.
    pub fn from_map(glyphs: HashMap<Piece, RgbaImage>) -> GlyphSet {
        GlyphSet { glyphs }
    }

    pub fn get(&self, piece: Piece) -> Option<&RgbaImage> {
        self.glyphs.get(&piece)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_filename_table_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for piece in Piece::ALL {
            assert!(seen.insert(glyph_filename(piece)), "duplicate filename");
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_load_from_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let set = GlyphSet::load(dir.path()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_partial_set() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        img.save(dir.path().join("pawn_white.png")).unwrap();

        let set = GlyphSet::load(dir.path()).unwrap();
        assert_eq!(set.len(), 1);

        let white_pawn = Piece {
            color: PieceColor::White,
            kind: PieceKind::Pawn,
        };
        let black_pawn = Piece {
            color: PieceColor::Black,
            kind: PieceKind::Pawn,
        };
        assert!(set.get(white_pawn).is_some());
        assert!(set.get(black_pawn).is_none());
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("king_black.png"), b"not a png").unwrap();
        assert!(GlyphSet::load(dir.path()).is_err());
    }
}
