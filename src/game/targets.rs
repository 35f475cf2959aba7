//! Destructible targets.
//!
//! A [`TargetField`] remembers the layout it was built from so a full reset
//! can bring every box back. A destroyed target stays destroyed until then.

use crate::game::config::TargetConfig;
use crate::physics::collision::Rect;
use crate::render::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub bounds: Rect,
    pub color: Color,
    pub destroyed: bool,
}

impl Target {
    pub fn from_config(config: &TargetConfig) -> Self {
        Self {
            bounds: config.bounds(),
            color: config.color,
            destroyed: false,
        }
    }
}

/// The live target list plus its canonical layout.
#[derive(Debug, Clone)]
pub struct TargetField {
    layout: Vec<TargetConfig>,
    targets: Vec<Target>,
}

impl TargetField {
    pub fn from_layout(layout: &[TargetConfig]) -> Self {
        let mut field = Self {
            layout: layout.to_vec(),
            targets: Vec::with_capacity(layout.len()),
        };
        field.reset();
        field
    }

    /// Rebuild every target from the layout, all standing.
    pub fn reset(&mut self) {
        self.targets.clear();
        self.targets
            .extend(self.layout.iter().map(Target::from_config));
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub(crate) fn targets_mut(&mut self) -> &mut [Target] {
        &mut self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets still standing.
    pub fn standing(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| !t.destroyed)
    }

    pub fn standing_count(&self) -> usize {
        self.standing().count()
    }

    /// True when no target is left standing (vacuously true for an empty layout).
    pub fn all_destroyed(&self) -> bool {
        self.targets.iter().all(|t| t.destroyed)
    }
}
