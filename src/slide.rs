use crate::tween::{Ease, Tween};

/// One full-screen panel in the deck. Identity is the index in the deck;
/// `duration` is how long the panel stays up before auto-advance.
#[derive(Debug, Clone, Copy)]
pub struct SlidePanel {
    pub alpha: f32,
    pub active: bool,
    pub duration: f32,
}

pub struct Deck {
    panels: Vec<SlidePanel>,
    current: usize,
}

impl Deck {
    /// Builds the deck with exactly panel 0 active and fully opaque.
    pub fn new(durations: &[f32]) -> Self {
        let panels = durations
            .iter()
            .enumerate()
            .map(|(i, &duration)| SlidePanel {
                alpha: if i == 0 { 1.0 } else { 0.0 },
                active: i == 0,
                duration,
            })
            .collect();
        Self { panels, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn panels(&self) -> &[SlidePanel] {
        &self.panels
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_duration(&self) -> f32 {
        self.panels[self.current].duration
    }

    pub fn in_range(&self, index: isize) -> bool {
        index >= 0 && (index as usize) < self.panels.len()
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = index;
    }
}

/// A crossfade between two panels: `from` fades 1 -> 0 while `to` fades
/// 0 -> 1 over the same duration. Each fade reports completion on its own;
/// the transition is complete only when both are.
pub struct Transition {
    from: usize,
    to: usize,
    fade_out: Tween,
    fade_in: Tween,
    out_done: bool,
    in_done: bool,
}

impl Transition {
    pub fn begin(deck: &mut Deck, from: usize, to: usize, fade_duration: f32) -> Self {
        // Both panels render during the crossfade.
        deck.panels[to].active = true;
        Self {
            from,
            to,
            fade_out: Tween::new(Ease::Linear, deck.panels[from].alpha, 0.0, fade_duration),
            fade_in: Tween::new(Ease::Linear, deck.panels[to].alpha, 1.0, fade_duration),
            out_done: false,
            in_done: false,
        }
    }

    pub fn to(&self) -> usize {
        self.to
    }

    /// Drives both fades one tick. Returns true once both have completed;
    /// `from` is deactivated the tick its own fade finishes.
    pub fn update(&mut self, deck: &mut Deck, dt: f32) -> bool {
        if !self.out_done {
            deck.panels[self.from].alpha = self.fade_out.update(dt);
            if self.fade_out.finished() {
                deck.panels[self.from].active = false;
                self.out_done = true;
            }
        }
        if !self.in_done {
            deck.panels[self.to].alpha = self.fade_in.update(dt);
            if self.fade_in.finished() {
                self.in_done = true;
            }
        }
        self.out_done && self.in_done
    }
}
