use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::shared::{DisplayState, LedState, NUM_GROUPS, NUM_VOICES, STEPS_PER_GROUP, Voice};

const LABEL_WIDTH: u16 = 8;

/// Paint the 3×16 grid from a [`DisplayState`]: one labelled row per voice,
/// steps in 4 groups of 4. Pure view; the caller owns the state.
pub fn draw_pattern_grid(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let row_constraints = [Constraint::Ratio(1, NUM_VOICES as u32); NUM_VOICES];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (voice, row_area) in Voice::ALL.into_iter().zip(rows.iter()) {
        draw_voice_row(frame, *row_area, state, voice);
    }
}

fn draw_voice_row(frame: &mut Frame, area: Rect, state: &DisplayState, voice: Voice) {
    let sections = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(voice.label()), sections[0]);

    let groups = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, NUM_GROUPS as u32); NUM_GROUPS])
        .spacing(1)
        .split(sections[1]);

    for (group_idx, group_area) in groups.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, STEPS_PER_GROUP as u32); STEPS_PER_GROUP])
            .split(*group_area);

        for (cell_idx, cell_area) in cells.iter().enumerate() {
            // grouping is cosmetic; step indexing stays linear 0..15
            let step = group_idx * STEPS_PER_GROUP + cell_idx;
            let lit = state.led(voice, step) == LedState::On;
            let color = cell_style(voice, lit);
            let block = Block::default().border_style(color).style(color);
            frame.render_widget(block, *cell_area);
        }
    }
}

fn cell_style(voice: Voice, lit: bool) -> Style {
    if !lit {
        return Style::default().fg(Color::DarkGray);
    }
    match voice {
        Voice::Hihat => Style::default().fg(Color::LightYellow).bg(Color::Yellow),
        Voice::Snare => Style::default().fg(Color::LightCyan).bg(Color::Cyan),
        Voice::Kick => Style::default().fg(Color::LightRed).bg(Color::Red),
    }
}
