//! Rasterises the world onto terminal cells.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skyflap::game::types::GameSession;
use skyflap::sprites::{SpriteSheet, BACKDROP, BIRD_FRAMES, GROUND, PIPE_BODY, PIPE_CAP};

/// Maps world coordinates (y up) onto a grid of terminal cells (row 0 at top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMapper {
    pub cols: u16,
    pub rows: u16,
    /// World units per column.
    pub x_scale: f64,
    /// World units per row.
    pub y_scale: f64,
    pub world_height: f64,
}

impl CellMapper {
    pub fn new(cols: u16, rows: u16, world_width: f64, world_height: f64) -> Self {
        Self {
            cols,
            rows,
            x_scale: world_width / cols.max(1) as f64,
            y_scale: world_height / rows.max(1) as f64,
            world_height,
        }
    }

    /// Cell containing a world point, clamped to the grid.
    pub fn cell_of(&self, x: f64, y: f64) -> (u16, u16) {
        let col = (x / self.x_scale).floor().max(0.0) as u16;
        let row = ((self.world_height - y) / self.y_scale).floor().max(0.0) as u16;
        (
            col.min(self.cols.saturating_sub(1)),
            row.min(self.rows.saturating_sub(1)),
        )
    }

    /// World point at the centre of a cell.
    pub fn center_of(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.x_scale,
            self.world_height - (row as f64 + 0.5) * self.y_scale,
        )
    }
}

enum PipePart {
    Body,
    Cap,
}

fn pipe_part_at(session: &GameSession, x: f64, y: f64, y_scale: f64) -> Option<PipePart> {
    let config = &session.config;
    let half_width = config.pipe_width / 2.0;
    for obstacle in &session.obstacles {
        if (x - obstacle.x).abs() > half_width {
            continue;
        }
        let top = obstacle.gap_top(config);
        let bottom = obstacle.gap_bottom(config);
        if y >= top && y <= top + config.pipe_height {
            return Some(if y - top < y_scale {
                PipePart::Cap
            } else {
                PipePart::Body
            });
        }
        if y <= bottom && y >= bottom - config.pipe_height {
            return Some(if bottom - y < y_scale {
                PipePart::Cap
            } else {
                PipePart::Body
            });
        }
    }
    None
}

fn sprite_span(sprites: &SpriteSheet, name: &str, index: usize) -> Span<'static> {
    match sprites.get(name) {
        Some(sprite) => Span::styled(
            sprite.glyph(index).to_string(),
            Style::default().fg(sprite.color),
        ),
        None => Span::raw(" "),
    }
}

/// Render backdrop, pipes, ground and avatar into `area`.
pub fn render_play_field(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    sprites: &SpriteSheet,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let config = &session.config;
    let mapper = CellMapper::new(
        area.width,
        area.height,
        config.screen_width,
        config.screen_height,
    );
    let avatar_cell = mapper.cell_of(session.avatar.x, session.avatar.y);
    let bird = BIRD_FRAMES[session.avatar.frame % BIRD_FRAMES.len()];
    let backdrop_shift = (session.backdrop.offset / mapper.x_scale) as usize;

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            if (col, row) == avatar_cell {
                let mut span = sprite_span(sprites, bird, 0);
                span.style = span.style.add_modifier(Modifier::BOLD);
                spans.push(span);
                continue;
            }

            let (x, y) = mapper.center_of(col, row);
            let span = match pipe_part_at(session, x, y, mapper.y_scale) {
                Some(PipePart::Cap) => sprite_span(sprites, PIPE_CAP, 0),
                Some(PipePart::Body) => sprite_span(sprites, PIPE_BODY, 0),
                None if row + 1 == area.height => sprite_span(sprites, GROUND, 0),
                None => sprite_span(
                    sprites,
                    BACKDROP,
                    col as usize + backdrop_shift + row as usize * 7,
                ),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Color::Reset)),
        area,
    );
}
