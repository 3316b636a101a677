//! Avatar kinematics.

use crate::game::types::GameSession;

/// Advance the avatar by `dt` seconds under gravity.
///
/// Ground and ceiling are solid to the avatar: it is kept inside
/// `[radius, screen_height - radius]` and stops dead on impact. Returns true
/// if the avatar was stopped by a boundary this step. Only moves while the
/// session is running.
pub fn integrate_avatar(session: &mut GameSession, dt: f64) -> bool {
    if !session.is_running() || dt <= 0.0 {
        return false;
    }

    let config = &session.config;
    let avatar = &mut session.avatar;

    avatar.velocity -= config.gravity * dt;
    avatar.y += avatar.velocity * dt;

    let floor = config.avatar_radius;
    let ceiling = config.screen_height - config.avatar_radius;
    if avatar.y <= floor {
        avatar.y = floor;
        avatar.velocity = 0.0;
        true
    } else if avatar.y >= ceiling {
        avatar.y = ceiling;
        avatar.velocity = 0.0;
        true
    } else {
        false
    }
}
