//! Entrance and exit transitions for popups.
//!
//! A [`Motion`] tracks how far an element has progressed between hidden (0.0)
//! and shown (1.0). The host advances it with [`Motion::tick`] and asks
//! [`Motion::apply`] where and how to draw the element for the current frame.

use ratatui::{layout::Rect, style::Modifier};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Named entrance/exit effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MotionType {
    /// No transition: show and hide take effect immediately
    None,
    Fade,
    /// Slides in from the bottom edge
    #[default]
    PullUp,
    ScaleFadeIn,
    /// Unrolls downwards from the top edge
    ScalePullDown,
}

impl MotionType {
    /// Every selectable effect, including `None`
    pub const ALL: [MotionType; 5] = [
        MotionType::None,
        MotionType::Fade,
        MotionType::PullUp,
        MotionType::ScaleFadeIn,
        MotionType::ScalePullDown,
    ];

    pub fn is_animated(self) -> bool {
        self != MotionType::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionConfig {
    /// Length of one full entrance or exit
    pub duration: Duration,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
        }
    }
}

impl MotionConfig {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStage {
    Hidden,
    Entering,
    Shown,
    Leaving,
}

/// Completion signals reported by [`Motion::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    Shown,
    Hidden,
}

/// Where and how to draw the animated element this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionFrame {
    pub area: Rect,
    /// Extra modifier applied over the element (`DIM` while fading)
    pub modifier: Modifier,
}

#[derive(Debug, Clone)]
pub struct Motion {
    kind: MotionType,
    config: MotionConfig,
    stage: MotionStage,
    /// Position along the transition, from zero (hidden) up to the duration (shown)
    position: Duration,
}

impl Motion {
    /// A motion that starts hidden
    pub fn new(kind: MotionType, config: MotionConfig) -> Self {
        Self {
            kind,
            config,
            stage: MotionStage::Hidden,
            position: Duration::ZERO,
        }
    }

    pub fn kind(&self) -> MotionType {
        self.kind
    }

    pub fn stage(&self) -> MotionStage {
        self.stage
    }

    /// Fraction of the transition completed, 0.0 hidden to 1.0 shown
    pub fn progress(&self) -> f32 {
        let duration = self.duration();
        if duration.is_zero() {
            return if self.stage == MotionStage::Shown { 1.0 } else { 0.0 };
        }
        (self.position.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn duration(&self) -> Duration {
        if self.kind.is_animated() {
            self.config.duration
        } else {
            Duration::ZERO
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.stage == MotionStage::Hidden
    }

    /// Starts (or reverses into) the entrance
    pub fn show(&mut self) {
        if matches!(self.stage, MotionStage::Hidden | MotionStage::Leaving) {
            log::debug!("{:?} entering", self.kind);
            self.stage = MotionStage::Entering;
        }
    }

    /// Starts (or reverses into) the exit
    pub fn hide(&mut self) {
        if matches!(self.stage, MotionStage::Shown | MotionStage::Entering) {
            log::debug!("{:?} leaving", self.kind);
            self.stage = MotionStage::Leaving;
        }
    }

    /// Advances the transition by `elapsed`. Returns the completion event on the
    /// tick that finishes an entrance or exit, and `None` otherwise.
    pub fn tick(&mut self, elapsed: Duration) -> Option<MotionEvent> {
        let duration = self.duration();

        match self.stage {
            MotionStage::Entering => {
                self.position = (self.position + elapsed).min(duration);
                if self.position >= duration {
                    self.stage = MotionStage::Shown;
                    log::debug!("{:?} shown", self.kind);
                    return Some(MotionEvent::Shown);
                }
                None
            }
            MotionStage::Leaving => {
                self.position = self.position.saturating_sub(elapsed);
                if self.position.is_zero() {
                    self.stage = MotionStage::Hidden;
                    log::debug!("{:?} hidden", self.kind);
                    return Some(MotionEvent::Hidden);
                }
                None
            }
            MotionStage::Hidden | MotionStage::Shown => None,
        }
    }

    /// Computes the frame of an element that rests at `area` inside `bounds`
    pub fn apply(&self, area: Rect, bounds: Rect) -> MotionFrame {
        // ease-out: fast start, gentle landing
        let p = 1.0 - (1.0 - self.progress()).powi(2);
        let settled = self.stage == MotionStage::Shown;
        let fading = if settled {
            Modifier::empty()
        } else {
            Modifier::DIM
        };

        let area = match self.kind {
            MotionType::None | MotionType::Fade => area,
            MotionType::PullUp => {
                let travel = bounds.bottom().saturating_sub(area.y);
                let y = area.y + (f32::from(travel) * (1.0 - p)).round() as u16;
                Rect {
                    y,
                    height: area.height.min(bounds.bottom().saturating_sub(y)),
                    ..area
                }
            }
            MotionType::ScalePullDown => Rect {
                height: ((f32::from(area.height) * p).round() as u16).min(area.height),
                ..area
            },
            MotionType::ScaleFadeIn => {
                let scale = 0.6 + 0.4 * p;
                let width = ((f32::from(area.width) * scale).round() as u16).min(area.width);
                let height = ((f32::from(area.height) * scale).round() as u16).min(area.height);
                Rect {
                    x: area.x + (area.width - width) / 2,
                    y: area.y + (area.height - height) / 2,
                    width,
                    height,
                }
            }
        };

        let modifier = match self.kind {
            MotionType::Fade | MotionType::ScaleFadeIn => fading,
            _ => Modifier::empty(),
        };

        MotionFrame { area, modifier }
    }
}
