use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;

/// Countdown trigger policy. The two policies come with their own intro
/// timings and are never composed: a run uses exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Fire near the end of any slide that stays up longer than the threshold.
    Threshold,
    /// Fire on a free-running wall-time interval, regardless of slide state.
    Interval,
}

impl Variant {
    pub fn camera_hold(self) -> f32 {
        match self {
            Variant::Threshold => CAMERA_HOLD_THRESHOLD,
            Variant::Interval => CAMERA_HOLD_INTERVAL,
        }
    }

    pub fn intro_hold(self) -> f32 {
        match self {
            Variant::Threshold => 0.0,
            Variant::Interval => INTRO_HOLD,
        }
    }

    pub fn shows_quotes(self) -> bool {
        matches!(self, Variant::Threshold)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideConfig {
    #[serde(default)]
    pub title: String,
    pub duration: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayAnchors {
    pub on_screen: [f32; 2],
    pub off_screen: [f32; 2],
}

impl Default for OverlayAnchors {
    fn default() -> Self {
        Self {
            on_screen: OVERLAY_ON_SCREEN,
            off_screen: OVERLAY_OFF_SCREEN,
        }
    }
}

/// Static show description, loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    pub slides: Vec<SlideConfig>,
    pub fade_duration: f32,
    pub variant: Variant,
    pub quotes: Vec<String>,
    pub overlay: OverlayAnchors,
}

impl Default for ShowConfig {
    fn default() -> Self {
        let slide = |title: &str, duration: f32| SlideConfig {
            title: title.to_string(),
            duration,
        };
        Self {
            slides: vec![
                slide("Welcome", 12.0),
                slide("The Problem", 8.0),
                slide("The Approach", 15.0),
                slide("Results", 12.0),
                slide("Questions", 20.0),
            ],
            fade_duration: 1.0,
            variant: Variant::Threshold,
            quotes: vec![
                "Make it work, make it right, make it fast.".to_string(),
                "Simplicity is the soul of efficiency.".to_string(),
                "The best way to predict the future is to invent it.".to_string(),
                "Deleted code is debugged code.".to_string(),
            ],
            overlay: OverlayAnchors::default(),
        }
    }
}

impl ShowConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading deck file {}", path.display()))?;
        let config: ShowConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing deck file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            bail!("deck has no slides");
        }
        if self.fade_duration <= 0.0 {
            bail!("fade_duration must be positive");
        }
        if let Some(slide) = self.slides.iter().find(|s| s.duration < 0.0) {
            bail!("slide {:?} has a negative duration", slide.title);
        }
        Ok(())
    }

    pub fn durations(&self) -> Vec<f32> {
        self.slides.iter().map(|s| s.duration).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_deck() {
        let yaml = "\
slides:
  - title: Intro
    duration: 5.0
  - duration: 30.0
fade_duration: 0.75
variant: interval
quotes:
  - keep going
overlay:
  on_screen: [-200.0, 60.0]
  off_screen: [200.0, 60.0]
";
        let config: ShowConfig = serde_yaml::from_str(yaml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.slides.len(), 2);
        assert_eq!(config.slides[1].title, "");
        assert_eq!(config.variant, Variant::Interval);
        assert_eq!(config.durations(), vec![5.0, 30.0]);
        assert_eq!(config.overlay.on_screen, [-200.0, 60.0]);
    }

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let config: ShowConfig = serde_yaml::from_str("slides: [{duration: 4.0}]").unwrap();
        assert_eq!(config.fade_duration, 1.0);
        assert_eq!(config.variant, Variant::Threshold);
        assert_eq!(config.overlay.off_screen, OVERLAY_OFF_SCREEN);
    }

    #[test]
    fn default_deck_is_valid() {
        ShowConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_empty_and_negative_decks() {
        let mut config = ShowConfig::default();
        config.slides.clear();
        assert!(config.validate().is_err());

        let mut config = ShowConfig::default();
        config.slides[0].duration = -1.0;
        assert!(config.validate().is_err());

        let mut config = ShowConfig::default();
        config.fade_duration = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn policy_timings_differ() {
        assert_eq!(Variant::Threshold.camera_hold(), CAMERA_HOLD_THRESHOLD);
        assert_eq!(Variant::Interval.camera_hold(), CAMERA_HOLD_INTERVAL);
        assert_eq!(Variant::Threshold.intro_hold(), 0.0);
        assert_eq!(Variant::Interval.intro_hold(), INTRO_HOLD);
        assert!(Variant::Threshold.shows_quotes());
        assert!(!Variant::Interval.shows_quotes());
    }
}
