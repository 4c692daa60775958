//! ratatui rendering for hosts that embed the editor in a terminal UI.

mod grid;

pub use grid::draw_pattern_grid;
