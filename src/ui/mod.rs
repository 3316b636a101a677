//! Terminal rendering.

pub mod game_common;
mod info_panel;
pub mod play_field;

use game_common::{create_game_layout, label_style, render_centered_label, render_status_bar};
use ratatui::{style::Color, Frame};
use skyflap::core::constants::READY_TEXT;
use skyflap::game::types::{GameSession, GameState};
use skyflap::sprites::SpriteSheet;

/// Front-end bookkeeping shown next to the play field.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    /// Highest score reached since launch.
    pub best_score: u32,
    pub seed: u64,
}

const CONTROLS: [(&str, &str); 2] = [("[Space/Up/Enter]", "Flap"), ("[Esc/q]", "Quit")];

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, session: &GameSession, sprites: &SpriteSheet, hud: &Hud) {
    let area = frame.size();
    let layout = create_game_layout(frame, area, " Skyflap ", Color::Cyan, 10, 22);

    play_field::render_play_field(frame, layout.content, session, sprites);

    let field = layout.content;
    render_centered_label(
        frame,
        field,
        1,
        &session.score_label,
        label_style(Color::White),
    );
    match session.state {
        GameState::Ready => {
            render_centered_label(
                frame,
                field,
                field.height * 2 / 3,
                READY_TEXT,
                label_style(Color::Yellow),
            );
        }
        GameState::GameOver => {
            if let Some(text) = &session.game_over_label {
                render_centered_label(
                    frame,
                    field,
                    field.height / 2,
                    text,
                    label_style(Color::Red),
                );
            }
        }
        GameState::Playing => {}
    }

    let (status, color) = match session.state {
        GameState::Ready => ("Press Space to start!".to_string(), Color::Yellow),
        GameState::Playing => (format!("Score: {}", session.score), Color::Green),
        GameState::GameOver => (
            format!("Crashed with {} - tap to retry", session.score),
            Color::Red,
        ),
    };
    render_status_bar(frame, layout.status_bar, &status, color, &CONTROLS);

    info_panel::render_info_panel(frame, layout.info_panel, session, hud);
}
