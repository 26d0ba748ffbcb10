//! Render configuration.
//! One immutable value built once per run: defaults, then an optional JSON
//! config file (serde), then CLI overrides, in that order. Passed explicitly
//! into the compositor rather than read as ambient state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use image::Rgba;
use serde::Deserialize;

pub const DEFAULT_SQUARE_SIZE: u32 = 500;
pub const DEFAULT_LIGHT_COLOR: &str = "#ffffff";
pub const DEFAULT_DARK_COLOR: &str = "#c1c1c1";
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "position_{name}.png";

/// Placeholder the output name template must contain.
pub const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Edge length of one square in pixels; the final image is 8x this.
    pub square_size: u32,
    /// Draw the checkerboard behind the pieces. When false the background
    /// stays fully transparent.
    pub include_board: bool,
    pub light_square_color: Rgba<u8>,
    pub dark_square_color: Rgba<u8>,
    pub pieces_folder: PathBuf,
    pub output_name_template: String,
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            square_size: DEFAULT_SQUARE_SIZE,
            include_board: true,
            light_square_color: Rgba([0xff, 0xff, 0xff, 0xff]),
            dark_square_color: Rgba([0xc1, 0xc1, 0xc1, 0xff]),
            pieces_folder: PathBuf::from("pieces"),
            output_name_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl RenderConfig {
    /// Folds a loaded config file into this value. Fields absent from the
    /// file keep their current setting.
    pub fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(size) = file.square_size {
            self.square_size = size;
        }
        if let Some(include) = file.include_board {
            self.include_board = include;
        }
        if let Some(hex) = file.light_square_color {
            self.light_square_color = hex_to_rgba(&hex)?;
        }
        if let Some(hex) = file.dark_square_color {
            self.dark_square_color = hex_to_rgba(&hex)?;
        }
        if let Some(folder) = file.pieces_folder {
            self.pieces_folder = folder;
        }
        if let Some(template) = file.output_name_template {
            self.output_name_template = template;
        }
        if let Some(dir) = file.output_dir {
            self.output_dir = dir;
        }
        Ok(())
    }

    /// Checked before any rendering starts; a bad config aborts the run.
    pub fn validate(&self) -> Result<()> {
        if self.square_size == 0 {
            bail!("square_size must be at least 1 pixel");
        }
        if !self.output_name_template.contains(NAME_PLACEHOLDER) {
            bail!(
                "output_name_template '{}' is missing the {} placeholder",
                self.output_name_template,
                NAME_PLACEHOLDER
            );
        }
        Ok(())
    }

    /// Expands the output name template for a diagram name.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir
            .join(self.output_name_template.replace(NAME_PLACEHOLDER, name))
    }
}

/// On-disk JSON shape. All fields optional so a file can override any subset.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub square_size: Option<u32>,
    pub include_board: Option<bool>,
    pub light_square_color: Option<String>,
    pub dark_square_color: Option<String>,
    pub pieces_folder: Option<PathBuf>,
    pub output_name_template: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<ConfigFile> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Converts a "#rrggbb" hex string into an opaque RGBA color.
pub fn hex_to_rgba(hex: &str) -> Result<Rgba<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("Color '{}' must be in #rrggbb format", hex);
    }
    let r = u8::from_str_radix(&digits[0..2], 16)?;
    let g = u8::from_str_radix(&digits[2..4], 16)?;
    let b = u8::from_str_radix(&digits[4..6], 16)?;
    Ok(Rgba([r, g, b, 255]))
}
