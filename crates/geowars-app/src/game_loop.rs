//! Frame loop: polls the input collaborator, ticks the engine and hands each
//! snapshot to the renderer until the close signal is raised.
//!
//! In realtime mode frames are paced to the configured rate and `dt` is the
//! measured wall time between frames. Otherwise frames run back to back with
//! a fixed `dt` of `1 / fps`.

use std::time::{Duration, Instant};

use geowars_core::commands::PlayerCommand;
use geowars_core::state::FrameSnapshot;
use geowars_sim::SimulationEngine;

/// Produces commands for the next frame.
pub trait InputSource {
    fn poll(&mut self, engine: &SimulationEngine) -> Vec<PlayerCommand>;
}

/// Consumes the snapshot of every frame.
pub trait Renderer {
    fn present(&mut self, snapshot: &FrameSnapshot);
}

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Raise the close signal after this many frames.
    pub max_frames: u64,
    pub realtime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub score: u32,
}

/// Wall-clock duration of one frame at `fps`.
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
}

/// Run until the engine stops. `max_frames` queues a `Quit` on the last
/// allowed frame so the engine shuts down through its own command path.
pub fn run_game_loop(
    engine: &mut SimulationEngine,
    options: LoopOptions,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
) -> LoopSummary {
    let fps = engine.config().window.fps;
    let fixed_dt = engine.config().frame_dt();
    let tick_duration = frame_duration(fps);

    let mut frames = 0;
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    while engine.is_running() {
        let commands = input.poll(engine);
        engine.queue_commands(commands);
        if frames + 1 >= options.max_frames {
            engine.queue_command(PlayerCommand::Quit);
        }

        let dt = if options.realtime {
            let now = Instant::now();
            let measured = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            // The first frame has nothing to measure against.
            if frames == 0 {
                fixed_dt
            } else {
                measured
            }
        } else {
            fixed_dt
        };

        let snapshot = engine.tick(dt);
        renderer.present(&snapshot);
        frames += 1;

        if options.realtime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind, reset instead of spiralling into catch-up.
                next_tick_time = now;
            }
        }
    }

    LoopSummary {
        frames,
        score: engine.score(),
    }
}
