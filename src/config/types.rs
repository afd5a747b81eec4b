use serde::Deserialize;
use std::time::Duration;

use crate::ui::animation::SpringSpec;
use crate::ui::greeting::{DetailReveal, GreetingSubject, ListSettings, ListStrategy};
use crate::ui::view::ToggleStyle;

/// Subjects generated by the revisions that exercise the lazy list.
const GENERATED_SUBJECTS: usize = 1000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feature level of the screen flow.
    pub revision: Revision,
    pub list: ListConfig,
    pub animation: AnimationConfig,
    pub ui: UiConfig,
}

/// One of the three progressive revisions of the screen flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Two greetings, eager list, detail shown only while expanded.
    Basic,
    /// 1000 greetings, lazy list, step extent, onboarding remembered.
    Stateful,
    /// 1000 greetings, lazy list, spring extent, onboarding remembered.
    #[default]
    Animated,
}

impl Revision {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Stateful => "Stateful",
            Self::Animated => "Animated",
        }
    }

    /// Whether the onboarding flag survives a restart.
    pub fn persists_onboarding(&self) -> bool {
        !matches!(self, Self::Basic)
    }

    pub fn strategy(&self, prefetch: usize) -> ListStrategy {
        match self {
            Self::Basic => ListStrategy::Eager,
            Self::Stateful | Self::Animated => ListStrategy::Lazy { prefetch },
        }
    }

    pub fn reveal(&self, spring: SpringSpec) -> DetailReveal {
        match self {
            Self::Basic => DetailReveal::Conditional,
            Self::Stateful => DetailReveal::Step,
            Self::Animated => DetailReveal::Spring(spring),
        }
    }

    pub fn toggle_style(&self) -> ToggleStyle {
        match self {
            Self::Basic | Self::Stateful => ToggleStyle::Button,
            Self::Animated => ToggleStyle::Icon,
        }
    }

    fn default_subjects(&self) -> Vec<GreetingSubject> {
        match self {
            Self::Basic => GreetingSubject::defaults(),
            Self::Stateful | Self::Animated => GreetingSubject::generated(GENERATED_SUBJECTS),
        }
    }
}

/// Greeting list overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Explicit subjects; wins over everything else.
    pub subjects: Option<Vec<String>>,
    /// Generate `"0"..` subjects instead of the revision's list.
    pub generated_count: Option<usize>,
    /// Items mounted beyond each edge of the lazy window.
    pub prefetch_items: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            subjects: None,
            generated_count: None,
            prefetch_items: 1,
        }
    }
}

/// Expansion animation parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub stiffness: f32,
    pub damping_ratio: f32,
    pub visibility_threshold: f32,
    /// Rows an expanded item grows by.
    pub expanded_extent: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let spring = SpringSpec::default();
        Self {
            stiffness: spring.stiffness,
            damping_ratio: spring.damping_ratio,
            visibility_threshold: spring.visibility_threshold,
            expanded_extent: ListSettings::default().expanded_extent,
        }
    }
}

/// Terminal loop settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Interval between frame ticks in milliseconds (default: 16).
    pub frame_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
        }
    }
}

impl Config {
    /// Subjects for the list: explicit list, then generated count, then the
    /// revision's default.
    pub fn subjects(&self) -> Vec<GreetingSubject> {
        if let Some(subjects) = &self.list.subjects {
            return subjects.iter().map(GreetingSubject::new).collect();
        }
        if let Some(count) = self.list.generated_count {
            return GreetingSubject::generated(count);
        }
        self.revision.default_subjects()
    }

    pub fn spring_spec(&self) -> SpringSpec {
        SpringSpec {
            stiffness: self.animation.stiffness,
            damping_ratio: self.animation.damping_ratio,
            visibility_threshold: self.animation.visibility_threshold,
        }
    }

    pub fn list_settings(&self) -> ListSettings {
        ListSettings {
            strategy: self.revision.strategy(self.list.prefetch_items),
            reveal: self.revision.reveal(self.spring_spec()),
            expanded_extent: self.animation.expanded_extent,
            ..ListSettings::default()
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.ui.frame_interval_ms)
    }
}
