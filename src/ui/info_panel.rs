use super::game_common::render_info_panel_frame;
use super::Hud;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skyflap::game::types::{GameSession, GameState};

fn state_name(state: GameState) -> (&'static str, Color) {
    match state {
        GameState::Ready => ("Ready", Color::Yellow),
        GameState::Playing => ("Flying", Color::Green),
        GameState::GameOver => ("Crashed", Color::Red),
    }
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession, hud: &Hud) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (state, state_color) = state_name(session.state);
    let lines = vec![
        Line::from(Span::styled(
            " Skyflap ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        stat_line("Score", session.score.to_string(), Color::White),
        stat_line("Best", hud.best_score.to_string(), Color::Yellow),
        Line::from(""),
        stat_line("State", state.to_string(), state_color),
        stat_line("Pipes", session.obstacles.len().to_string(), Color::Green),
        Line::from(""),
        stat_line("Seed", hud.seed.to_string(), Color::DarkGray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
