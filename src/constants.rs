pub const WINDOW_WIDTH: i32 = 1280;             // Host window width (pixels)
pub const WINDOW_HEIGHT: i32 = 720;             // Host window height (pixels)
pub const FPS: u32 = 60;                        // Frames per second

pub const SETTLE_DURATION: f32 = 1.0;           // Pause after the start animation signal (seconds)
pub const CAMERA_HOLD_THRESHOLD: f32 = 4.0;     // Focus-camera hold, threshold policy (seconds)
pub const CAMERA_HOLD_INTERVAL: f32 = 3.0;      // Focus-camera hold, interval policy (seconds)
pub const INTRO_REVEAL_DURATION: f32 = 3.0;     // Intro panel glide-in (seconds)
pub const INTRO_HOLD: f32 = 50.0;               // Extra hold before slide 0, interval policy (seconds)
pub const INTRO_PANEL_START_X: f32 = WINDOW_WIDTH as f32; // Intro panel glide start (offscreen right)

pub const FOCUS_CAMERA_PRIORITY: i32 = 2;       // Priority handed to the focus camera after settle

pub const COUNTDOWN_SECONDS: f32 = 10.0;        // Visible countdown length (seconds)
pub const COUNTDOWN_THRESHOLD: f32 = 10.0;      // Threshold policy: fire when this much slide time remains
pub const COUNTDOWN_INTERVAL: f32 = 50.0;       // Interval policy: fire every time this much wall time accumulates

pub const OVERLAY_SLIDE_DURATION: f32 = 0.5;    // Overlay glide in/out (seconds)
pub const OVERLAY_END_HOLD: f32 = 0.5;          // Overlay hold at zero before gliding out (seconds)
pub const OVERLAY_ON_SCREEN: [f32; 2] = [-283.0, 85.0]; // Resting anchor offset from bottom-right
pub const OVERLAY_OFF_SCREEN: [f32; 2] = [283.0, 85.0]; // Offscreen anchor offset from bottom-right

pub const START_ANIM_DURATION: f32 = 2.0;       // Stand-in length of the host start-light animation (seconds)
