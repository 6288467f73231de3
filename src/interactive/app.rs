//! TUI event loop and terminal lifecycle
//!
//! Single-threaded: each pass waits for terminal input until the one-shot
//! timer is due, hands at most one input and one timer fire to the controller,
//! and arms the timer from the transition it returns.

use super::input::map_event;
use super::rendering::ui;
use crate::reveal::{
    Action, OneShotTimer, RoundController, Transition, timing::total_roll_duration,
};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll interval while no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run one loop pass: the input first, then the timer if it is due
///
/// An input that changes nothing still lets a due timer fire in the same pass.
pub fn dispatch<R: Rng>(
    controller: &mut RoundController<'_, R>,
    timer: &mut OneShotTimer,
    input: Option<Action>,
    now: Instant,
) -> Transition {
    if let Some(action) = input {
        let transition = controller.handle(action);
        if transition != Transition::Idle {
            return transition;
        }
    }

    if timer.fire_if_due(now) {
        controller.on_timer_fire()
    } else {
        Transition::Idle
    }
}

/// Turn a transition into its timer effect
///
/// Breaks on quit, abandoning any pending timer.
pub fn apply(transition: Transition, timer: &mut OneShotTimer, now: Instant) -> ControlFlow<()> {
    match transition {
        Transition::Schedule(delay) => {
            timer.arm(now, delay);
            ControlFlow::Continue(())
        }
        Transition::Idle => ControlFlow::Continue(()),
        Transition::Quit => {
            timer.disarm();
            ControlFlow::Break(())
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(controller: RoundController<'_, R>) -> Result<()> {
    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut controller: RoundController<'_, R>,
) -> Result<()> {
    info!(round_length = ?total_roll_duration(), "reveal session started");
    let mut timer = OneShotTimer::new();

    // The first round starts without waiting for input
    let mut transition = controller.begin_round();

    loop {
        if apply(transition, &mut timer, Instant::now()).is_break() {
            break;
        }

        terminal.draw(|f| ui(f, &controller.view()))?;

        let wait = timer.remaining(Instant::now()).unwrap_or(IDLE_POLL);
        let input = if event::poll(wait)? {
            let event = event::read()?;
            let action = map_event(&event);
            if action.is_some() {
                debug!(?action, "input");
            }
            action
        } else {
            None
        };

        transition = dispatch(&mut controller, &mut timer, input, Instant::now());
    }

    info!(rounds = controller.rounds_played(), "reveal session ended");
    Ok(())
}

/// Restore the terminal before printing a panic
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}
