//! Begin-contact detection.

use super::bodies::Body;
use crate::game::types::BodyKind;
use std::collections::HashSet;

/// Reports a pair only on the step it starts touching. The pair is
/// remembered until it separates, so a contact that lasts many steps
/// produces a single notification.
#[derive(Debug, Default)]
pub struct ContactDetector {
    touching: HashSet<(BodyKind, BodyKind)>,
}

impl ContactDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs that overlap now but did not overlap on the previous call.
    pub fn detect(&mut self, bodies: &[Body]) -> Vec<(BodyKind, BodyKind)> {
        let mut now = HashSet::new();
        let mut began = Vec::new();

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                if !a.wants_contact_with(b) || !a.shape.overlaps(&b.shape) {
                    continue;
                }
                let pair = (a.kind, b.kind);
                if !self.touching.contains(&pair) {
                    began.push(pair);
                }
                now.insert(pair);
            }
        }

        self.touching = now;
        began
    }

    pub fn clear(&mut self) {
        self.touching.clear();
    }

    pub fn touching_count(&self) -> usize {
        self.touching.len()
    }
}
