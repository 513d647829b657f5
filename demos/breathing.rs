//! Animates a breathing LED in the terminal until a key is pressed.

use std::io::{Write, stdout};
use std::panic;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, Event, KeyCode},
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use syncwave::{Clock, Constant, Cosine, Ramp, Step, SyncExt, SyncFunction, SystemClock};

const BAR_WIDTH: usize = 50;

fn main() -> Result<()> {
    let clock = SystemClock::new();

    // Inhale slowly, hold, then exhale along the falling half of a cosine and rest
    let exhale = Cosine::new(2400)?.min(Step::new(1200, 2400)?)?;
    let mut breath = (Ramp::new(2000)? + Constant::new(500, 1.0)? + exhale)
        .scale_y(0.9)?
        .offset_y(0.05)?
        .repeat_forever()?
        .started(&clock);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(cursor::Hide)?;

    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = run(&mut breath, &clock);
    cleanup_terminal();
    result
}

fn run(breath: &mut impl SyncFunction, clock: &SystemClock) -> Result<()> {
    let mut out = stdout();
    loop {
        if event::poll(Duration::from_millis(16))?
            && let Event::Key(key) = event::read()?
        {
            match key.code {
                KeyCode::Char('r') => breath.restart(clock),
                _ => break,
            }
        }

        let level = breath.value_now(clock).clamp(0.0, 1.0);
        let filled = (level * BAR_WIDTH as f32).round() as usize;
        out.queue(cursor::MoveTo(0, 0))?
            .queue(Clear(ClearType::All))?
            .queue(Print(format!(
                "t = {:>6} ms   brightness {:>5.3}\r\n[{}{}]\r\n\r\nr: restart   any other key: quit",
                clock.now(),
                level,
                "#".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
            )))?;
        out.flush()?;
    }
    Ok(())
}

/// Restores cursor, screen and raw mode.
fn cleanup_terminal() {
    let _ = stdout().execute(cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}
