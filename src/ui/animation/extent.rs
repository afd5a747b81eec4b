//! Extra extent below an expanded greeting item.

use std::time::Duration;

use super::spring::{Spring, SpringSpec};

/// Offset that pushes following content down while an item is expanded.
///
/// `Step` jumps straight to its target; `Spring` follows a damped spring.
/// Either way `offset()` never goes below zero, however far the spring
/// overshoots on the way back.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimatedExtent {
    Step { value: f32 },
    Spring(Spring),
}

impl Default for AnimatedExtent {
    fn default() -> Self {
        Self::Step { value: 0.0 }
    }
}

impl AnimatedExtent {
    pub fn spring(spec: SpringSpec) -> Self {
        Self::Spring(Spring::new(spec, 0.0))
    }

    pub fn set_target(&mut self, target: f32) {
        match self {
            Self::Step { value } => *value = target,
            Self::Spring(spring) => spring.animate_to(target),
        }
    }

    pub fn target(&self) -> f32 {
        match self {
            Self::Step { value } => *value,
            Self::Spring(spring) => spring.target(),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Self::Spring(spring) = self {
            spring.step(dt);
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            Self::Step { .. } => false,
            Self::Spring(spring) => !spring.is_settled(),
        }
    }

    /// Current offset, clamped at zero.
    pub fn offset(&self) -> f32 {
        let raw = match self {
            Self::Step { value } => *value,
            Self::Spring(spring) => spring.value(),
        };
        raw.max(0.0)
    }
}
