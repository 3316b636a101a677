//! Minimal physics: collision categories, shapes, begin-contact detection
//! and avatar integration.

pub mod bodies;
pub mod contacts;
pub mod motion;

pub use bodies::{collect_bodies, Body, Category, Rect, Shape};
pub use contacts::ContactDetector;
pub use motion::integrate_avatar;
