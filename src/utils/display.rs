//! Display and output formatting utilities

use crate::config::DisplayStyle;
use crate::game_of_life::{Grid, GridEngine};
use itertools::Itertools;

/// ANSI sequence that clears the screen and homes the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Format grids for terminal display
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.size() * (grid.size() + 1) * 3);
        for row in grid.rows() {
            output.extend(row.iter().map(|&alive| if alive { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        output.push_str(&(0..grid.size()).map(|x| format!("{:2}", x % 10)).join(""));
        output.push('\n');

        // Rows with row numbers
        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &alive in row {
                output.push_str(if alive { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    pub fn format_grid(grid: &Grid, style: DisplayStyle) -> String {
        match style {
            DisplayStyle::Compact => Self::format_grid_compact(grid),
            DisplayStyle::Coordinates => Self::format_grid_with_coords(grid),
        }
    }

    /// One-line summary of the engine state
    pub fn format_status(engine: &GridEngine) -> String {
        let size = engine.size();
        let living = engine.living_count();
        format!(
            "Generation {} | {}x{} | Living: {} ({:.1}%)",
            engine.generation(),
            size,
            size,
            living,
            living as f64 / (size * size) as f64 * 100.0
        )
    }

    /// A full animation frame: optional screen clear, grid, status line
    pub fn format_frame(engine: &GridEngine, style: DisplayStyle, clear_screen: bool) -> String {
        let mut output = String::new();
        if clear_screen {
            output.push_str(CLEAR_SCREEN);
        }
        output.push_str(&Self::format_grid(engine.snapshot(), style));
        output.push_str(&Self::format_status(engine));
        output.push('\n');
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
