use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use raylib::prelude::*;

mod config;
mod constants;
mod countdown;
mod sequencer;
mod slide;
mod state;
mod tween;

use crate::config::{ShowConfig, Variant};
use crate::constants::*;
use crate::sequencer::{InputFrame, Sequencer};
use crate::state::Phase;

#[derive(Parser)]
#[command(name = "showrunner", version)]
#[command(about = "Timed presentation sequencer with crossfades and a countdown overlay")]
struct Cli {
    /// YAML deck to present (built-in demo deck when omitted)
    deck: Option<PathBuf>,

    /// Countdown trigger policy override
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Seed for quote selection (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

const SLIDE_COLORS: [(u8, u8, u8); 5] = [
    (41, 74, 122),
    (122, 62, 41),
    (52, 104, 62),
    (94, 52, 104),
    (104, 94, 40),
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.deck {
        Some(path) => ShowConfig::load(path)?,
        None => ShowConfig::default(),
    };
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut sequencer = Sequencer::new(&config, rng);

    println!(
        "Deck: {} slides, fade {:.1}s, policy {:?}",
        config.slides.len(),
        config.fade_duration,
        config.variant
    );

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Showrunner")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Stand-in for the host's start-light animation: it reports completion
    // a fixed time after the lights come on.
    let mut start_anim_timer = 0.0f32;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // Key edges, sampled exactly once per tick.
        let input = InputFrame {
            begin: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
            next: rl.is_key_pressed(KeyboardKey::KEY_DOWN),
            prev: rl.is_key_pressed(KeyboardKey::KEY_UP),
        };

        if sequencer.start_lights() {
            start_anim_timer += dt;
            if start_anim_timer >= START_ANIM_DURATION {
                sequencer.set_anim_end();
            }
        }

        sequencer.tick(dt, &input);

        let mut d = rl.begin_drawing(&thread);
        draw_show(&mut d, &sequencer, &config);
    }

    Ok(())
}

fn draw_show(d: &mut RaylibDrawHandle, sequencer: &Sequencer, config: &ShowConfig) {
    // Ambient lights lift the whole scene out of black.
    let background = if sequencer.ambient_lights() {
        Color::new(24, 24, 28, 255)
    } else {
        Color::BLACK
    };
    d.clear_background(background);

    if sequencer.start_lights() {
        d.draw_rectangle(0, 0, WINDOW_WIDTH, 120, Color::new(255, 244, 200, 160));
        d.draw_text("* start lights *", 20, 46, 30, Color::RAYWHITE);
    }

    if sequencer.phase() == Phase::AwaitBegin {
        d.draw_text(
            "press SPACE to begin",
            WINDOW_WIDTH / 2 - 180,
            WINDOW_HEIGHT / 2,
            30,
            Color::GRAY,
        );
        return;
    }

    // Slide panels, bottom of the stack.
    for (i, panel) in sequencer.deck().panels().iter().enumerate() {
        if !panel.active {
            continue;
        }
        let (r, g, b) = SLIDE_COLORS[i % SLIDE_COLORS.len()];
        let alpha = (panel.alpha.clamp(0.0, 1.0) * 255.0) as u8;
        d.draw_rectangle(
            60,
            150,
            WINDOW_WIDTH - 120,
            WINDOW_HEIGHT - 220,
            Color::new(r, g, b, alpha),
        );
        let title = config
            .slides
            .get(i)
            .map(|s| s.title.as_str())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .unwrap_or_else(|| format!("Slide {}", i + 1));
        d.draw_text(&title, 100, 200, 48, Color::new(255, 255, 255, alpha));
    }

    // Intro panel banner glides in over the slides and stays.
    if sequencer.intro_panel_active() {
        let x = sequencer.intro_panel_x() as i32;
        d.draw_rectangle(x, 60, WINDOW_WIDTH, 70, Color::new(230, 230, 240, 235));
        d.draw_text("Tonight's Program", x + 30, 78, 34, Color::new(20, 20, 30, 255));
    }

    // Countdown overlay, anchored off the bottom-right corner.
    let overlay = sequencer.overlay();
    if overlay.is_active() {
        let offset = overlay.position();
        let cx = WINDOW_WIDTH as f32 + offset[0];
        let cy = WINDOW_HEIGHT as f32 - offset[1];
        let color = overlay.color();
        let fill_color = Color::new(
            (color.r * 255.0) as u8,
            (color.g * 255.0) as u8,
            (color.b * 255.0) as u8,
            255,
        );

        d.draw_circle(cx as i32, cy as i32, 64.0, Color::new(10, 10, 10, 220));
        d.draw_circle_sector(
            Vector2::new(cx, cy),
            58.0,
            0.0,
            360.0 * overlay.fill(),
            64,
            fill_color,
        );
        let label = overlay.remaining().to_string();
        d.draw_text(&label, cx as i32 - 12, cy as i32 - 20, 40, Color::RAYWHITE);

        if let Some(quote) = overlay.quote() {
            let width = d.measure_text(quote, 20);
            d.draw_text(
                quote,
                cx as i32 - width - 90,
                cy as i32 - 10,
                20,
                Color::LIGHTGRAY,
            );
        }
    }
}
