#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Phase {
    AwaitBegin, // Waiting for the begin key
    StartLight, // Start lights up, waiting for the host animation to finish
    Settle,     // Short pause after the animation signal
    CameraHold, // Focus camera has control before the intro panel reveal
    IntroHold,  // Extra wait before slide 0 (interval policy only)
    Slide,      // Current slide on screen, wait interruptible by input
    Transition, // Crossfade between two slides in flight
}
