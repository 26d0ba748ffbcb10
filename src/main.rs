mod config;
mod fen;
mod glyphs;
mod input;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};

use config::{ConfigFile, RenderConfig};
use glyphs::GlyphSet;
use input::FenRecord;

fn main() -> Result<()> {
    // Parse CLI arguments
    let matches = Command::new("fen-diagram")
        .version("0.1.0")
        .about("Turns lists of FEN strings into PNG board diagrams")
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .help("Input file with one '<FEN> -> <name>;' record per line")
                .default_value("positions.txt"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("JSON config file (any subset of the render settings)"),
        )
        .arg(
            Arg::new("pieces")
                .long("pieces")
                .value_name("DIR")
                .help("Folder containing the piece glyph PNGs"),
        )
        .arg(
            Arg::new("square-size")
                .long("square-size")
                .value_name("PIXELS")
                .help("Edge length of one board square")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("no-board")
                .long("no-board")
                .action(ArgAction::SetTrue)
                .help("Skip the checkerboard; pieces on a transparent background"),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .value_name("DIR")
                .help("Directory the diagrams are written into"),
        )
        .get_matches();

    let mut cfg = RenderConfig::default();
    if let Some(path) = matches.get_one::<String>("config") {
        let file = ConfigFile::load(Path::new(path))?;
        cfg.apply_file(file)
            .with_context(|| format!("Invalid setting in config file {}", path))?;
    }
    if let Some(dir) = matches.get_one::<String>("pieces") {
        cfg.pieces_folder = PathBuf::from(dir);
    }
    if let Some(size) = matches.get_one::<u32>("square-size") {
        cfg.square_size = *size;
    }
    if matches.get_flag("no-board") {
        cfg.include_board = false;
    }
    if let Some(dir) = matches.get_one::<String>("out-dir") {
        cfg.output_dir = PathBuf::from(dir);
    }
    cfg.validate()?;

    let glyph_set = GlyphSet::load(&cfg.pieces_folder).with_context(|| {
        format!(
            "Failed to load piece glyphs from {}",
            cfg.pieces_folder.display()
        )
    })?;
    if glyph_set.is_empty() {
        eprintln!(
            "Warning: no piece glyphs found in {}; only empty boards will render",
            cfg.pieces_folder.display()
        );
    }

    let input_path = matches.get_one::<String>("input").unwrap(); // Safe due to default
    let text = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file {}", input_path))?;

    // One line at a time: a bad record is reported and the run moves on.
    let mut saved = 0usize;
    let mut failed = 0usize;
    for (i, raw) in text.lines().enumerate() {
        let Some(record) = input::parse_line(raw, i + 1) else {
            continue;
        };
        match process_record(&record, &glyph_set, &cfg) {
            Ok(path) => {
                println!("Saved: {}", path.display());
                saved += 1;
            }
            Err(e) => {
                eprintln!("[Line {}] {:#}", record.line, e);
                failed += 1;
            }
        }
    }
    println!("Done: {} diagram(s) saved, {} failed.", saved, failed);

    Ok(())
}

/// Decode, render, and persist one record. Returns the written path.
fn process_record(
    record: &FenRecord,
    glyph_set: &GlyphSet,
    cfg: &RenderConfig,
) -> Result<PathBuf> {
    let grid = fen::decode(input::placement_field(&record.fen))
        .with_context(|| format!("Malformed FEN '{}'", record.fen))?;

    let image = render::render(&grid, glyph_set, cfg)
        .with_context(|| format!("Failed to render FEN '{}'", record.fen))?;

    let path = cfg.output_path(&record.name);
    image
        .save(&path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Writes a solid PNG for every piece identity into `dir`.
    fn write_full_glyph_folder(dir: &std::path::Path) {
        for piece in fen::Piece::ALL {
            let img = RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255]));
            img.save(dir.join(glyphs::glyph_filename(piece))).unwrap();
        }
    }

    #[test]
    fn test_process_record_end_to_end() {
        let pieces = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_full_glyph_folder(pieces.path());

        let cfg = RenderConfig {
            square_size: 8,
            output_dir: out.path().to_path_buf(),
            ..RenderConfig::default()
        };
        let glyph_set = GlyphSet::load(pieces.path()).unwrap();
        assert_eq!(glyph_set.len(), 12);

        let record = input::parse_line(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 -> start;",
            1,
        )
        .unwrap();
        let path = process_record(&record, &glyph_set, &cfg).unwrap();

        assert_eq!(path, out.path().join("position_start.png"));
        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), 64);
        assert_eq!(saved.height(), 64);
    }

    #[test]
    fn test_process_record_reports_malformed_fen() {
        let out = tempfile::tempdir().unwrap();
        let cfg = RenderConfig {
            square_size: 8,
            output_dir: out.path().to_path_buf(),
            ..RenderConfig::default()
        };
        let glyph_set = GlyphSet::from_map(Default::default());

        let record = input::parse_line("8/8/8/8/8/8/8 -> short;", 2).unwrap();
        let err = process_record(&record, &glyph_set, &cfg).unwrap_err();
        assert!(format!("{:#}", err).contains("8/8/8/8/8/8/8"));
        assert!(out.path().read_dir().unwrap().next().is_none());
    }
}
