//! Formatting utilities for terminal output

use crate::core::CellColor;
use crate::engine::Cell;
use colored::Colorize;

/// Format a row of cell colors as emoji string
#[must_use]
pub fn colors_to_emoji(colors: &[CellColor; 5]) -> String {
    colors
        .iter()
        .map(|color| match color {
            CellColor::Green => '🟩',
            CellColor::Yellow => '🟨',
            CellColor::Neutral => '⬜',
        })
        .collect()
}

/// Render one grid cell as a colored letter block
#[must_use]
pub fn cell_block(cell: Cell) -> String {
    let letter = cell.letter().map_or(' ', |c| c.to_ascii_uppercase());
    let text = format!(" {letter} ");

    match cell.color() {
        CellColor::Green => text.black().on_green().to_string(),
        CellColor::Yellow => text.black().on_yellow().to_string(),
        CellColor::Neutral => text.white().on_bright_black().to_string(),
    }
}

/// Format remaining seconds as m:ss
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
