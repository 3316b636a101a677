//! Glyph sprites: the terminal stand-in for textures.
//!
//! The renderer looks every sprite up by name. A missing sprite is a start-up
//! error rather than a blank cell, since nothing sensible can be drawn in its
//! place.

use crate::core::error::{GameError, GameResult};
use ratatui::style::Color;
use std::collections::HashMap;

pub const BIRD_FRAMES: [&str; 2] = ["bird_1", "bird_2"];
pub const PIPE_BODY: &str = "pipe_body";
pub const PIPE_CAP: &str = "pipe_cap";
pub const BACKDROP: &str = "backdrop";
pub const GROUND: &str = "ground";

/// Every sprite the renderer draws.
pub const REQUIRED_SPRITES: [&str; 6] = [
    BIRD_FRAMES[0],
    BIRD_FRAMES[1],
    PIPE_BODY,
    PIPE_CAP,
    BACKDROP,
    GROUND,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Glyphs cycled horizontally; single-glyph sprites repeat one character.
    pub glyphs: Vec<char>,
    pub color: Color,
}

impl Sprite {
    pub fn new(glyphs: &str, color: Color) -> Self {
        Self {
            glyphs: glyphs.chars().collect(),
            color,
        }
    }

    /// Glyph for column `index`, wrapping around the pattern.
    pub fn glyph(&self, index: usize) -> char {
        if self.glyphs.is_empty() {
            ' '
        } else {
            self.glyphs[index % self.glyphs.len()]
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    sprites: HashMap<String, Sprite>,
}

impl SpriteSheet {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Sprite)>,
    {
        Self {
            sprites: entries.into_iter().collect(),
        }
    }

    /// The sprites shipped with the game.
    pub fn builtin() -> Self {
        Self::from_entries([
            (BIRD_FRAMES[0].to_string(), Sprite::new("▲", Color::Yellow)),
            (BIRD_FRAMES[1].to_string(), Sprite::new("▼", Color::Yellow)),
            (PIPE_BODY.to_string(), Sprite::new("█", Color::Green)),
            (PIPE_CAP.to_string(), Sprite::new("▓", Color::LightGreen)),
            (
                BACKDROP.to_string(),
                Sprite::new("   .      *        .   ·     ", Color::DarkGray),
            ),
            (GROUND.to_string(), Sprite::new("▀", Color::Yellow)),
        ])
    }

    /// Built-in sheet, checked for completeness.
    pub fn load() -> GameResult<Self> {
        let sheet = Self::builtin();
        sheet.validate(&REQUIRED_SPRITES)?;
        Ok(sheet)
    }

    pub fn validate(&self, required: &[&str]) -> GameResult<()> {
        for name in required {
            self.require(name)?;
        }
        Ok(())
    }

    pub fn require(&self, name: &str) -> GameResult<&Sprite> {
        self.sprites
            .get(name)
            .ok_or_else(|| GameError::MissingAsset(name.to_string()))
    }

    /// Lookup for sheets already validated by [`SpriteSheet::load`].
    pub fn get(&self, name: &str) -> Option<&Sprite> {
        self.sprites.get(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
