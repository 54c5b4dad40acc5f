//! Terminal collaborators for the menu run loop
//!
//! The widget only needs two things from the host terminal: a blocking,
//! unechoed single-key read and a way to wipe the viewport. Both sit behind
//! traits so tests can script them; the crossterm implementations below are
//! what [`MenuWidget::run`](crate::MenuWidget::run) uses.

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Stdout};
use tracing::trace;

/// Blocking read of one raw keypress, no echo, no line buffering
pub trait KeyReader {
    fn read_key(&mut self) -> io::Result<char>;
}

/// Wipes the visible terminal viewport
pub trait ScreenClearer {
    fn clear(&mut self) -> io::Result<()>;
}

impl<T: KeyReader + ?Sized> KeyReader for &mut T {
    fn read_key(&mut self) -> io::Result<char> {
        (**self).read_key()
    }
}

impl<T: ScreenClearer + ?Sized> ScreenClearer for &mut T {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }
}

/// Navigation action a key resolves to under the current keybinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Select,
    None,
}

/// Raw mode held for the lifetime of the guard
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Reads keys through crossterm, entering raw mode only while waiting so
/// that menu output printed between reads keeps normal line handling.
#[derive(Debug, Default)]
pub struct CrosstermKeyReader;

impl CrosstermKeyReader {
    pub fn new() -> Self {
        Self
    }
}

impl KeyReader for CrosstermKeyReader {
    fn read_key(&mut self) -> io::Result<char> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(c) = key_to_char(key)? {
                    trace!(key = ?c, "Key read");
                    return Ok(c);
                }
            }
        }
    }
}

/// Map a key event onto the character a console `getch` would return.
/// Keys without a character form yield `None`; Ctrl+C becomes an
/// `Interrupted` error since raw mode suppresses SIGINT.
pub fn key_to_char(key: KeyEvent) -> io::Result<Option<char>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "interrupted by Ctrl+C",
        ));
    }

    let c = match key.code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\r',
        KeyCode::Tab => '\t',
        KeyCode::Backspace => '\x08',
        KeyCode::Esc => '\x1b',
        _ => return Ok(None),
    };
    Ok(Some(c))
}

/// Clears stdout and homes the cursor
#[derive(Debug)]
pub struct CrosstermScreen {
    out: Stdout,
}

impl CrosstermScreen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenClearer for CrosstermScreen {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }
}
