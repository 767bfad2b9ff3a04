use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{ShowConfig, Variant};
use crate::constants::*;
use crate::countdown::CountdownOverlay;
use crate::slide::{Deck, Transition};
use crate::state::Phase;
use crate::tween::{Ease, Tween};

/// Key edges sampled by the host once per tick. A flag is true only on the
/// tick the key goes down.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputFrame {
    pub begin: bool,
    pub next: bool,
    pub prev: bool,
}

/// Drives the whole show: the one-shot intro chain, the per-slide wait with
/// auto-advance and keyboard navigation, the crossfade lifecycle and the
/// countdown trigger policy. Everything is advanced by `tick`; the host
/// reads the resulting state back out and renders it.
///
/// Exactly one phase is current at any moment, so there is never more than
/// one wait or one transition in flight and a stale wait can never race a
/// navigation move.
pub struct Sequencer {
    phase: Phase,
    phase_elapsed: f32,
    variant: Variant,

    deck: Deck,
    fade_duration: f32,
    transition: Option<Transition>,

    overlay: CountdownOverlay,
    quotes: Vec<String>,
    rng: StdRng,
    interval_timer: f32,

    // Intro visuals, read by the host.
    start_lights: bool,
    ambient_lights: bool,
    camera_priority: i32,
    intro_panel: bool,
    intro_reveal: Option<Tween>,
    intro_x: f32,

    // One-shot completion signal from the host's start animation. Setting it
    // more than once is a no-op; setting it early is remembered.
    anim_end: bool,
}

impl Sequencer {
    pub fn new(config: &ShowConfig, rng: StdRng) -> Self {
        Self {
            phase: Phase::AwaitBegin,
            phase_elapsed: 0.0,
            variant: config.variant,
            deck: Deck::new(&config.durations()),
            fade_duration: config.fade_duration,
            transition: None,
            overlay: CountdownOverlay::new(config.overlay.on_screen, config.overlay.off_screen),
            quotes: config.quotes.clone(),
            rng,
            interval_timer: 0.0,
            start_lights: false,
            ambient_lights: false,
            camera_priority: 0,
            intro_panel: false,
            intro_reveal: None,
            intro_x: INTRO_PANEL_START_X,
            anim_end: false,
        }
    }

    pub fn set_anim_end(&mut self) {
        self.anim_end = true;
    }

    pub fn tick(&mut self, dt: f32, input: &InputFrame) {
        // The intro panel reveal is fire-and-forget: it keeps gliding while
        // the phase machine moves on to the slide cycle.
        if let Some(reveal) = &mut self.intro_reveal {
            self.intro_x = reveal.update(dt);
            if reveal.finished() {
                self.intro_reveal = None;
            }
        }

        self.overlay.update(dt);

        // The interval policy counts wall time from the very first tick and
        // owns its own reset; a trigger landing while the overlay is still
        // up is swallowed by the overlay's guard.
        if self.variant == Variant::Interval {
            self.interval_timer += dt;
            if self.interval_timer >= COUNTDOWN_INTERVAL {
                self.interval_timer = 0.0;
                self.trigger_countdown();
            }
        }

        self.phase_elapsed += dt;
        match self.phase {
            Phase::AwaitBegin => {
                if input.begin {
                    self.start_lights = true;
                    self.enter(Phase::StartLight);
                }
            }
            Phase::StartLight => {
                if self.anim_end {
                    self.enter(Phase::Settle);
                }
            }
            Phase::Settle => {
                if self.phase_elapsed >= SETTLE_DURATION {
                    self.start_lights = false;
                    self.ambient_lights = true;
                    self.camera_priority = FOCUS_CAMERA_PRIORITY;
                    self.enter(Phase::CameraHold);
                }
            }
            Phase::CameraHold => {
                if self.phase_elapsed >= self.variant.camera_hold() {
                    self.intro_panel = true;
                    self.intro_x = INTRO_PANEL_START_X;
                    self.intro_reveal = Some(Tween::new(
                        Ease::InOutQuart,
                        INTRO_PANEL_START_X,
                        0.0,
                        INTRO_REVEAL_DURATION,
                    ));
                    if self.variant.intro_hold() > 0.0 {
                        self.enter(Phase::IntroHold);
                    } else {
                        self.enter(Phase::Slide);
                    }
                }
            }
            Phase::IntroHold => {
                if self.phase_elapsed >= self.variant.intro_hold() {
                    self.enter(Phase::Slide);
                }
            }
            Phase::Slide => {
                // Navigation owns this tick's input; the wait it interrupts
                // dies with the phase change, so no stale wait survives.
                if input.next {
                    self.move_to(self.deck.current() as isize + 1);
                } else if input.prev {
                    self.move_to(self.deck.current() as isize - 1);
                } else {
                    let duration = self.deck.current_duration();
                    if self.variant == Variant::Threshold
                        && duration > COUNTDOWN_THRESHOLD
                        && duration - self.phase_elapsed <= COUNTDOWN_THRESHOLD
                    {
                        self.trigger_countdown();
                    }
                    if self.phase_elapsed >= duration {
                        self.move_to(self.deck.current() as isize + 1);
                    }
                }
            }
            Phase::Transition => {
                if let Some(transition) = &mut self.transition {
                    if transition.update(&mut self.deck, dt) {
                        let to = transition.to();
                        self.transition = None;
                        self.deck.set_current(to);
                        self.enter(Phase::Slide);
                    }
                }
            }
        }
    }

    /// Starts a crossfade to `target`. Out-of-range targets are refused
    /// silently: the current slide stays up and its wait keeps running.
    fn move_to(&mut self, target: isize) {
        if !self.deck.in_range(target) {
            return;
        }
        let from = self.deck.current();
        let to = target as usize;
        self.transition = Some(Transition::begin(&mut self.deck, from, to, self.fade_duration));
        self.enter(Phase::Transition);
    }

    fn trigger_countdown(&mut self) {
        if self.overlay.is_active() {
            return;
        }
        let quote = if self.variant.shows_quotes() && !self.quotes.is_empty() {
            let pick = self.rng.random_range(0..self.quotes.len());
            Some(self.quotes[pick].clone())
        } else {
            None
        };
        self.overlay.show(COUNTDOWN_SECONDS, quote);
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn overlay(&self) -> &CountdownOverlay {
        &self.overlay
    }

    pub fn start_lights(&self) -> bool {
        self.start_lights
    }

    pub fn ambient_lights(&self) -> bool {
        self.ambient_lights
    }

    pub fn camera_priority(&self) -> i32 {
        self.camera_priority
    }

    pub fn intro_panel_active(&self) -> bool {
        self.intro_panel
    }

    pub fn intro_panel_x(&self) -> f32 {
        self.intro_x
    }
}
