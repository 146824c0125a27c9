//! Frame loop around [`Game`]
//!
//! Owns the clock, feeds scripted key events and forwards tick events to a
//! sink. Quit ends the loop immediately; the game has nothing to tear down.

use std::thread;
use std::time::{Duration, Instant};

use game_core::{Command, EventSink, Game, GameEvent, InputState, Params, SoundCue};

/// Logs every event in place of real audio
#[derive(Debug, Default)]
pub struct LogSink {
    pub received: usize,
}

impl EventSink for LogSink {
    fn notify(&mut self, event: &GameEvent) {
        self.received += 1;
        log::info!("event: {:?}", event);
        if let Some(cue) = SoundCue::for_event(event) {
            log::debug!(
                "beep {} Hz for {} ms at volume {:.2}",
                cue.freq_hz,
                cue.duration_ms,
                cue.volume
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Every frame lasts exactly 1 / frame cap seconds
    Fixed,
    /// Wall clock, capped at the frame rate
    Realtime,
}

pub struct Clock {
    mode: ClockMode,
    frame: Duration,
    last: Instant,
}

impl Clock {
    pub fn new(mode: ClockMode, frame_cap: u32) -> Self {
        Self {
            mode,
            frame: Duration::from_secs_f64(1.0 / frame_cap.max(1) as f64),
            last: Instant::now(),
        }
    }

    /// Seconds since the previous frame
    pub fn tick(&mut self) -> f32 {
        match self.mode {
            ClockMode::Fixed => self.frame.as_secs_f32(),
            ClockMode::Realtime => {
                let elapsed = self.last.elapsed();
                if elapsed < self.frame {
                    thread::sleep(self.frame - elapsed);
                }
                let now = Instant::now();
                let dt = now.duration_since(self.last).as_secs_f32();
                self.last = now;
                dt.min(Params::MAX_DT)
            }
        }
    }
}

/// A raw key name and whether it went down (`true`) or up
pub type KeyPress = (&'static str, bool);

/// Key presses for the smoke run: both paddles sweep up and down, and the
/// match is paused for half a second once.
pub fn scripted_keys(tick: u64) -> Vec<KeyPress> {
    let mut keys = Vec::new();
    match tick % 240 {
        0 => keys.extend([("s", true), ("ArrowUp", true)]),
        120 => keys.extend([
            ("s", false),
            ("ArrowUp", false),
            ("w", true),
            ("ArrowDown", true),
        ]),
        239 => keys.extend([("w", false), ("ArrowDown", false)]),
        _ => {}
    }
    if tick == 600 || tick == 660 {
        keys.push(("p", true));
    }
    keys
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    GameOver,
    TickLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub stop: StopReason,
}

pub fn run<F>(
    game: &mut Game,
    clock: &mut Clock,
    script: F,
    max_ticks: u64,
    sink: &mut dyn EventSink,
) -> RunSummary
where
    F: Fn(u64) -> Vec<KeyPress>,
{
    let mut input = InputState::new();

    for tick in 0..max_ticks {
        for (name, pressed) in script(tick) {
            match input.handle_named(name, pressed) {
                Some(Command::Quit) => {
                    log::info!("quit at tick {}", tick);
                    return RunSummary {
                        ticks: tick,
                        stop: StopReason::Quit,
                    };
                }
                Some(command) => game.handle_command(command),
                None => {}
            }
        }

        let dt = clock.tick();
        game.advance_with_sink(&input, dt, sink);

        if game.phase().is_game_over() {
            return RunSummary {
                ticks: tick + 1,
                stop: StopReason::GameOver,
            };
        }
    }

    RunSummary {
        ticks: max_ticks,
        stop: StopReason::TickLimit,
    }
}
