//! Collision bodies derived from the session each step.

use crate::core::constants::BOUNDARY_THICKNESS;
use crate::game::types::{BodyKind, GameSession};
use bitflags::bitflags;

bitflags! {
    /// Collision categories. Powers of two so they combine into masks.
    pub struct Category: u32 {
        const AVATAR = 1;
        const SOLID = 2;
        const SCORE_GAP = 4;
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            min_x: cx - width / 2.0,
            min_y: cy - height / 2.0,
            max_x: cx + width / 2.0,
            max_y: cy + height / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { x: f64, y: f64, radius: f64 },
    Rect(Rect),
}

impl Shape {
    /// Touching counts as overlapping.
    pub fn overlaps(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Circle { x, y, radius }, Shape::Rect(rect))
            | (Shape::Rect(rect), Shape::Circle { x, y, radius }) => {
                let (x, y, radius) = (*x, *y, *radius);
                let nearest_x = x.clamp(rect.min_x, rect.max_x);
                let nearest_y = y.clamp(rect.min_y, rect.max_y);
                let dx = x - nearest_x;
                let dy = y - nearest_y;
                dx * dx + dy * dy <= radius * radius
            }
            (Shape::Rect(a), Shape::Rect(b)) => {
                a.min_x <= b.max_x
                    && b.min_x <= a.max_x
                    && a.min_y <= b.max_y
                    && b.min_y <= a.max_y
            }
            (
                Shape::Circle {
                    x: ax,
                    y: ay,
                    radius: ar,
                },
                Shape::Circle {
                    x: bx,
                    y: by,
                    radius: br,
                },
            ) => {
                let dx = *ax - *bx;
                let dy = *ay - *by;
                let reach = *ar + *br;
                dx * dx + dy * dy <= reach * reach
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub shape: Shape,
    pub category: Category,
    /// Categories this body wants contact notifications for.
    pub contact_mask: Category,
    /// Categories this body cannot pass through.
    pub collision_mask: Category,
    /// Only dynamic bodies are moved by physics. Two static bodies never
    /// produce contacts with each other.
    pub dynamic: bool,
}

impl Body {
    fn solid(kind: BodyKind, rect: Rect) -> Self {
        Self {
            kind,
            shape: Shape::Rect(rect),
            category: Category::SOLID,
            contact_mask: Category::SOLID,
            collision_mask: Category::SOLID,
            dynamic: false,
        }
    }

    fn score_gap(kind: BodyKind, rect: Rect) -> Self {
        Self {
            kind,
            shape: Shape::Rect(rect),
            category: Category::SCORE_GAP,
            contact_mask: Category::AVATAR,
            collision_mask: Category::SCORE_GAP,
            dynamic: false,
        }
    }

    /// Whether a contact between these two bodies is reported.
    pub fn wants_contact_with(&self, other: &Body) -> bool {
        (self.dynamic || other.dynamic)
            && (self.category.intersects(other.contact_mask)
                || other.category.intersects(self.contact_mask))
    }
}

/// Build every body in the scene: avatar, ground, ceiling and the three
/// parts of each obstacle.
pub fn collect_bodies(session: &GameSession) -> Vec<Body> {
    let config = &session.config;
    let avatar = &session.avatar;
    let mut bodies = Vec::with_capacity(3 + session.obstacles.len() * 3);

    bodies.push(Body {
        kind: BodyKind::Avatar,
        shape: Shape::Circle {
            x: avatar.x,
            y: avatar.y,
            radius: config.avatar_radius,
        },
        category: Category::AVATAR,
        contact_mask: Category::SOLID,
        collision_mask: Category::SOLID,
        dynamic: true,
    });

    bodies.push(Body::solid(
        BodyKind::Ground,
        Rect {
            min_x: 0.0,
            min_y: -BOUNDARY_THICKNESS,
            max_x: config.screen_width,
            max_y: 0.0,
        },
    ));
    bodies.push(Body::solid(
        BodyKind::Ceiling,
        Rect {
            min_x: 0.0,
            min_y: config.screen_height,
            max_x: config.screen_width,
            max_y: config.screen_height + BOUNDARY_THICKNESS,
        },
    ));

    for obstacle in &session.obstacles {
        let gap_top = obstacle.gap_top(config);
        let gap_bottom = obstacle.gap_bottom(config);
        bodies.push(Body::solid(
            BodyKind::UpperPipe(obstacle.id),
            Rect::centered(
                obstacle.x,
                gap_top + config.pipe_height / 2.0,
                config.pipe_width,
                config.pipe_height,
            ),
        ));
        bodies.push(Body::solid(
            BodyKind::LowerPipe(obstacle.id),
            Rect::centered(
                obstacle.x,
                gap_bottom - config.pipe_height / 2.0,
                config.pipe_width,
                config.pipe_height,
            ),
        ));
        // Half the pipe width, so the avatar has to actually make it through.
        bodies.push(Body::score_gap(
            BodyKind::ScoreGap(obstacle.id),
            Rect::centered(
                obstacle.x,
                obstacle.gap_center_y,
                config.pipe_width / 2.0,
                config.gap_height,
            ),
        ));
    }

    bodies
}
