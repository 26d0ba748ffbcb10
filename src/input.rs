//! Input list parsing.
//! One record per line, `<FEN> -> <name>;`. Blank lines, `#` comments, and
//! lines without the arrow are skipped before anything reaches the decoder.

/// One usable line from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenRecord {
    /// Full FEN as written; only its placement field gets decoded.
    pub fen: String,
    /// Sanitized diagram name for the output filename.
    pub name: String,
    /// 1-based source line, for error reports.
    pub line: usize,
}

/// Parses one input line. Returns None for lines the run should skip
/// (blank, comment, or missing the `->` separator).
pub fn parse_line(raw: &str, line: usize) -> Option<FenRecord> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let (fen_part, name_part) = trimmed.split_once("->")?;

    let fen = fen_part.trim().to_string();
    let mut name = name_part.trim();
    if let Some(stripped) = name.strip_suffix(';') {
        name = stripped.trim_end();
    }

    let mut name = sanitize_name(name);
    if name.is_empty() {
        name = format!("diagram_{}", line);
    }

    Some(FenRecord { fen, name, line })
}

/// Keeps only filesystem-friendly characters from a diagram name.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Returns only the piece-placement field of a FEN string.
pub fn placement_field(fen: &str) -> &str {
    fen.split_whitespace().next().unwrap_or("")
}
