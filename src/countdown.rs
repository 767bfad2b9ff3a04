use crate::constants::*;
use crate::tween::{lerp, Ease, Tween};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const GREEN: Rgb = Rgb { r: 0.0, g: 1.0, b: 0.0 };
    pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };

    pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: lerp(a.r, b.r, t),
            g: lerp(a.g, b.g, t),
            b: lerp(a.b, b.b, t),
        }
    }
}

/// Whole seconds left on the clock, never negative.
pub fn remaining_count(elapsed: f32, seconds: f32) -> u32 {
    (seconds - elapsed).max(0.0).ceil() as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayPhase {
    Inactive,
    SlidingIn,  // Gliding from the offscreen anchor to the resting anchor
    Counting,   // Ticking down; fill and color track normalized progress
    Hold,       // Pinned at zero before leaving
    SlidingOut, // Gliding back offscreen
}

/// The countdown affordance: a radial fill, a numeric remaining count and an
/// optional quote line, gliding in from offscreen, counting down and gliding
/// out again. One instance is reused for every trigger.
pub struct CountdownOverlay {
    phase: OverlayPhase,
    on_screen: [f32; 2],
    off_screen: [f32; 2],
    glide: f32, // 0 = offscreen anchor, 1 = resting anchor
    glide_tween: Tween,
    seconds: f32,
    elapsed: f32,
    hold_elapsed: f32,
    remaining: u32,
    fill: f32,
    color: Rgb,
    quote: Option<String>,
}

impl CountdownOverlay {
    pub fn new(on_screen: [f32; 2], off_screen: [f32; 2]) -> Self {
        Self {
            phase: OverlayPhase::Inactive,
            on_screen,
            off_screen,
            glide: 0.0,
            glide_tween: Tween::new(Ease::Linear, 0.0, 0.0, 0.0),
            seconds: 0.0,
            elapsed: 0.0,
            hold_elapsed: 0.0,
            remaining: 0,
            fill: 0.0,
            color: Rgb::RED,
            quote: None,
        }
    }

    /// Arms the countdown. A trigger while the overlay is anywhere in its
    /// lifecycle is a no-op; the caller learns so from the return value.
    pub fn show(&mut self, seconds: f32, quote: Option<String>) -> bool {
        if self.phase != OverlayPhase::Inactive {
            return false;
        }
        self.phase = OverlayPhase::SlidingIn;
        self.glide_tween = Tween::new(Ease::OutExpo, 0.0, 1.0, OVERLAY_SLIDE_DURATION);
        self.seconds = seconds;
        self.elapsed = 0.0;
        self.hold_elapsed = 0.0;
        self.remaining = remaining_count(0.0, seconds);
        self.fill = 1.0;
        self.color = Rgb::GREEN;
        self.quote = quote;
        true
    }

    pub fn update(&mut self, dt: f32) {
        match self.phase {
            OverlayPhase::Inactive => {}
            OverlayPhase::SlidingIn => {
                self.glide = self.glide_tween.update(dt);
                if self.glide_tween.finished() {
                    self.phase = OverlayPhase::Counting;
                }
            }
            OverlayPhase::Counting => {
                self.elapsed += dt;
                if self.elapsed < self.seconds {
                    let t = self.elapsed / self.seconds;
                    self.remaining = remaining_count(self.elapsed, self.seconds);
                    self.fill = (1.0 - t).clamp(0.0, 1.0);
                    self.color = Rgb::lerp(Rgb::GREEN, Rgb::RED, t);
                } else {
                    self.remaining = 0;
                    self.fill = 0.0;
                    self.color = Rgb::RED;
                    self.phase = OverlayPhase::Hold;
                }
            }
            OverlayPhase::Hold => {
                self.hold_elapsed += dt;
                if self.hold_elapsed >= OVERLAY_END_HOLD {
                    self.glide_tween = Tween::new(Ease::InExpo, 1.0, 0.0, OVERLAY_SLIDE_DURATION);
                    self.phase = OverlayPhase::SlidingOut;
                }
            }
            OverlayPhase::SlidingOut => {
                self.glide = self.glide_tween.update(dt);
                if self.glide_tween.finished() {
                    self.phase = OverlayPhase::Inactive;
                    self.quote = None;
                }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != OverlayPhase::Inactive
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Current anchor offset, interpolated between the offscreen and
    /// resting anchors by the glide progress.
    pub fn position(&self) -> [f32; 2] {
        [
            lerp(self.off_screen[0], self.on_screen[0], self.glide),
            lerp(self.off_screen[1], self.on_screen[1], self.glide),
        ]
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn fill(&self) -> f32 {
        self.fill
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> CountdownOverlay {
        CountdownOverlay::new(OVERLAY_ON_SCREEN, OVERLAY_OFF_SCREEN)
    }

    #[test]
    fn remaining_is_ceil_of_time_left() {
        assert_eq!(remaining_count(0.0, 10.0), 10);
        assert_eq!(remaining_count(0.25, 10.0), 10);
        assert_eq!(remaining_count(9.0, 10.0), 1);
        assert_eq!(remaining_count(9.75, 10.0), 1);
        assert_eq!(remaining_count(10.0, 10.0), 0);
        assert_eq!(remaining_count(12.0, 10.0), 0);
    }

    #[test]
    fn color_runs_green_to_red_monotonically() {
        assert_eq!(Rgb::lerp(Rgb::GREEN, Rgb::RED, 0.0), Rgb::GREEN);
        assert_eq!(Rgb::lerp(Rgb::GREEN, Rgb::RED, 1.0), Rgb::RED);
        let mut prev = Rgb::GREEN;
        for i in 1..=20 {
            let c = Rgb::lerp(Rgb::GREEN, Rgb::RED, i as f32 / 20.0);
            assert!(c.r >= prev.r);
            assert!(c.g <= prev.g);
            assert_eq!(c.b, 0.0);
            prev = c;
        }
    }

    #[test]
    fn trigger_while_active_is_a_no_op() {
        let mut ov = overlay();
        assert!(ov.show(10.0, None));
        assert!(!ov.show(10.0, None));
        // Still guarded in every later phase of the lifecycle.
        ov.update(OVERLAY_SLIDE_DURATION);
        assert_eq!(ov.phase(), OverlayPhase::Counting);
        assert!(!ov.show(10.0, None));
        ov.update(10.0);
        assert_eq!(ov.phase(), OverlayPhase::Hold);
        assert!(!ov.show(10.0, None));
    }

    #[test]
    fn full_lifecycle_returns_to_inactive() {
        let mut ov = overlay();
        ov.show(2.0, Some("stay sharp".into()));
        assert_eq!(ov.phase(), OverlayPhase::SlidingIn);

        ov.update(0.25);
        ov.update(0.25);
        assert_eq!(ov.phase(), OverlayPhase::Counting);
        assert_eq!(ov.position(), OVERLAY_ON_SCREEN);
        assert_eq!(ov.quote(), Some("stay sharp"));

        // 2 seconds of counting.
        for _ in 0..8 {
            ov.update(0.25);
        }
        assert_eq!(ov.phase(), OverlayPhase::Hold);
        assert_eq!(ov.remaining(), 0);
        assert_eq!(ov.fill(), 0.0);
        assert_eq!(ov.color(), Rgb::RED);

        ov.update(OVERLAY_END_HOLD);
        assert_eq!(ov.phase(), OverlayPhase::SlidingOut);
        ov.update(0.25);
        ov.update(0.25);
        assert_eq!(ov.phase(), OverlayPhase::Inactive);
        assert_eq!(ov.position(), OVERLAY_OFF_SCREEN);
        assert_eq!(ov.quote(), None);
    }

    #[test]
    fn counting_tracks_fill_and_remaining() {
        let mut ov = overlay();
        ov.show(10.0, None);
        ov.update(OVERLAY_SLIDE_DURATION);
        assert_eq!(ov.phase(), OverlayPhase::Counting);

        ov.update(2.5);
        assert_eq!(ov.remaining(), 8);
        assert!((ov.fill() - 0.75).abs() < 1e-5);
        let quarter = ov.color();
        assert!((quarter.r - 0.25).abs() < 1e-5);
        assert!((quarter.g - 0.75).abs() < 1e-5);

        ov.update(5.0);
        assert_eq!(ov.remaining(), 3);
        assert!((ov.fill() - 0.25).abs() < 1e-5);
    }
}
