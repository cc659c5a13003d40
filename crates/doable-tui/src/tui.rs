//! Terminal lifecycle: setup, restoration, and panic-safe cleanup.
//!
//! Mouse capture is not optional here — the per-row delete control is
//! click-driven, so entering the TUI without it would silently disable
//! half the app's input surface. Restoration is centralized in
//! [`restore_terminal`], which both the normal teardown path and the
//! panic hook go through.

use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand, cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Backend = CrosstermBackend<Stdout>;

/// Owns the ratatui terminal for the duration of the session.
///
/// Dropping it restores the user's terminal, so the app can bail with
/// `?` anywhere without leaving raw mode behind.
pub struct Tui {
    terminal: Terminal<Backend>,
}

impl Tui {
    /// Build the terminal. The screen is untouched until [`enter`](Self::enter).
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }

    /// Take over the terminal: raw mode, alternate screen, mouse
    /// capture (clicks drive deletion), hidden cursor.
    ///
    /// Steps mirror [`restore_terminal`] in reverse; keep the two in
    /// sync when adding modes.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        out.execute(EnterAlternateScreen)?;
        out.execute(EnableMouseCapture)?;
        out.execute(cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Draw a frame using the provided render closure.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Undo everything [`Tui::enter`] did, in reverse order.
///
/// Best-effort and idempotent: every step runs even if an earlier one
/// fails, so a half-initialized terminal still comes back usable, and
/// calling it after a previous restore is harmless. This is the single
/// restore path — `Drop` and the panic hook both end up here.
pub fn restore_terminal() {
    let mut out = stdout();
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Install panic and error hooks that restore the terminal before
/// printing.
///
/// Must be called BEFORE entering the terminal, so panics during init
/// also get clean output.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();

    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        panic_hook(info);
    }));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Restore must stay safe to call at any point: before `enter`, and
    // repeatedly (Drop after an explicit restore, panic hook after Drop).
    #[test]
    fn restore_is_safe_to_repeat_without_an_entered_terminal() {
        restore_terminal();
        restore_terminal();
    }
}
