//! Parser and writer for the `Tile <id>:` text format
//!
//! ```text
//! Tile 2311:
//! ..##.#..#.
//! ##..#.....
//! ...
//!
//! Tile 1951:
//! ...
//! ```

use std::fmt::Write as _;
use std::path::Path;

use crate::io::error::{MosaicError, Result};
use crate::spatial::tile::TileDescriptor;

/// Parse blank-line separated tile blocks
///
/// Pixel rows are passed through unchecked; shape and characters are
/// validated when the engine ingests each tile.
///
/// # Errors
///
/// Returns an error for a missing or unreadable header, or a header without
/// pixel rows
pub fn parse_tiles(text: &str) -> Result<Vec<TileDescriptor>> {
    let mut tiles = Vec::new();
    let mut current: Option<(usize, TileDescriptor)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim_end();

        if line.is_empty() {
            if let Some((header_line, tile)) = current.take() {
                tiles.push(finish(header_line, tile)?);
            }
            continue;
        }

        match current.as_mut() {
            Some((_, tile)) => tile.rows.push(line.to_string()),
            None => {
                let id = parse_header(line).ok_or_else(|| MosaicError::InvalidInput {
                    line: line_number,
                    reason: format!("expected 'Tile <id>:', found {line:?}"),
                })?;
                current = Some((
                    line_number,
                    TileDescriptor {
                        id,
                        rows: Vec::new(),
                    },
                ));
            }
        }
    }

    if let Some((header_line, tile)) = current {
        tiles.push(finish(header_line, tile)?);
    }

    Ok(tiles)
}

fn parse_header(line: &str) -> Option<u64> {
    line.strip_prefix("Tile")?
        .trim()
        .strip_suffix(':')?
        .trim()
        .parse()
        .ok()
}

fn finish(header_line: usize, tile: TileDescriptor) -> Result<TileDescriptor> {
    if tile.rows.is_empty() {
        return Err(MosaicError::InvalidInput {
            line: header_line,
            reason: format!("tile {} has no pixel rows", tile.id),
        });
    }
    Ok(tile)
}

/// Read and parse a tile file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse
pub fn read_tiles(path: &Path) -> Result<Vec<TileDescriptor>> {
    let text = read_text(path)?;
    parse_tiles(&text)
}

/// Read a whole text file, keeping the path in the error
///
/// # Errors
///
/// Returns a file system error if the file cannot be read
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })
}

/// Render tiles in the format [`parse_tiles`] reads
pub fn render_tiles(tiles: &[TileDescriptor]) -> String {
    let mut text = String::new();
    for (index, tile) in tiles.iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        let _ = writeln!(text, "Tile {}:", tile.id);
        for row in &tile.rows {
            text.push_str(row);
            text.push('\n');
        }
    }
    text
}
