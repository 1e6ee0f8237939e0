//! Interactive single-vehicle radar simulation.
//!
//! Type a speed and duration, pick a band and direction, then run the
//! simulation and listen to the synthesized echo.
//!
//! Controls:
//! - Digits, '.', '-': edit the focused entry
//! - TAB: switch between the speed and duration entries
//! - BACKSPACE: delete from the focused entry
//! - B: cycle through K-, Ka-, and X-band
//! - A/R: vehicle approaching / receding
//! - M: toggle metric units
//! - ENTER: run the simulation and play the result
//! - Q or ESC: quit

mod common;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use radartone::{Band, Direction, STANDARD_SAMPLE_RATE, Simulation, UnitSystem};
use std::io::{Write, stdout};
use std::panic;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Speed,
    Duration,
}

struct InputForm {
    speed: String,
    duration: String,
    band: Option<Band>,
    direction: Direction,
    metric: bool,
    focus: Focus,
    status: String,
}

impl InputForm {
    fn new() -> Self {
        Self {
            speed: String::new(),
            duration: String::new(),
            // K-band preselected, like the dial on most real guns.
            band: Some(Band::K),
            direction: Direction::Unspecified,
            metric: false,
            focus: Focus::Speed,
            status: String::from("enter vehicle data, then press ENTER"),
        }
    }

    fn units(&self) -> UnitSystem {
        if self.metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    fn focused_entry(&mut self) -> &mut String {
        match self.focus {
            Focus::Speed => &mut self.speed,
            Focus::Duration => &mut self.duration,
        }
    }

    fn run(&mut self) {
        let sim = Simulation::<STANDARD_SAMPLE_RATE>::new(self.band, self.units());
        match sim.run_single(&self.speed, self.direction, &self.duration) {
            Ok(buffer) => match common::play_buffer(&buffer) {
                Ok(()) => self.status = format!("played {:.2} s", buffer.duration()),
                Err(err) => self.status = format!("playback failed: {}", err),
            },
            Err(err) => {
                self.status = format!("error: {}", err);
            }
        }
    }
}

fn draw_ui(form: &InputForm) -> Result<()> {
    let mut stdout = stdout();

    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    stdout.execute(crossterm::cursor::MoveTo(0, 0))?;
    write!(stdout, "Radar target simulator - single vehicle")?;

    stdout.execute(crossterm::cursor::MoveTo(0, 2))?;
    let marker = |focus| if form.focus == focus { '>' } else { ' ' };
    write!(
        stdout,
        "{} Speed:    {:<12} {}",
        marker(Focus::Speed),
        form.speed,
        form.units().speed_label()
    )?;
    stdout.execute(crossterm::cursor::MoveTo(0, 3))?;
    write!(
        stdout,
        "{} Duration: {:<12} sec",
        marker(Focus::Duration),
        form.duration
    )?;

    stdout.execute(crossterm::cursor::MoveTo(0, 5))?;
    let band = form
        .band
        .map(|b| b.to_string())
        .unwrap_or_else(|| String::from("none"));
    write!(stdout, "Band: {}   Direction: {}", band, form.direction)?;

    stdout.execute(crossterm::cursor::MoveTo(0, 7))?;
    write!(
        stdout,
        "TAB=field B=band A/R=direction M=units ENTER=run Q=quit"
    )?;

    stdout.execute(crossterm::cursor::MoveTo(0, 9))?;
    write!(stdout, "{}", form.status)?;

    stdout.flush()?;
    Ok(())
}

fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn main() -> Result<()> {
    let mut form = InputForm::new();

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    // Restore the terminal even if something panics mid-run.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    draw_ui(&form)?;

    loop {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(KeyEvent { code, .. }) = event::read()?
        {
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                KeyCode::Tab => {
                    form.focus = match form.focus {
                        Focus::Speed => Focus::Duration,
                        Focus::Duration => Focus::Speed,
                    };
                }
                KeyCode::Backspace => {
                    form.focused_entry().pop();
                }
                KeyCode::Char('b') | KeyCode::Char('B') => {
                    form.band = Some(match form.band {
                        Some(Band::K) => Band::Ka,
                        Some(Band::Ka) => Band::X,
                        Some(Band::X) | None => Band::K,
                    });
                }
                KeyCode::Char('a') | KeyCode::Char('A') => {
                    form.direction = Direction::Approaching;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    form.direction = Direction::Receding;
                }
                KeyCode::Char('m') | KeyCode::Char('M') => form.metric = !form.metric,
                KeyCode::Enter => form.run(),
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                    form.focused_entry().push(c);
                }
                _ => {}
            }
            draw_ui(&form)?;
        }
    }

    cleanup_terminal();

    Ok(())
}
