//! Key-driven run loop
//!
//! A run appends a synthetic "Exit" entry, then repeatedly clears the
//! screen, draws the menu and reads one key until Exit is selected. The
//! entry is owned by a session guard whose `Drop` removes it again on every
//! way out of the loop, including I/O errors and panicking actions.

use super::{Action, MenuEntry, MenuWidget};
use crate::constants::EXIT_LABEL;
use crate::error::MenuError;
use crate::terminal::{CrosstermKeyReader, CrosstermScreen, KeyReader, NavAction, ScreenClearer};
use std::io::{self, Write};
use tracing::{debug, trace};

/// Whether a run loop is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Idle,
    Running,
}

/// Outcome of feeding one key to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Cursor moved to a new index
    Moved(usize),
    /// Up at the top or down at the bottom
    Stayed,
    /// Select on a regular entry at this index
    Invoke(usize),
    /// Select on the synthetic Exit entry
    Exit,
    /// Key is not bound, or there is nothing to select
    Ignored,
}

impl MenuWidget {
    /// Run on the real terminal: crossterm key reads, crossterm clears,
    /// output to stdout.
    pub fn run(&mut self) -> Result<(), MenuError> {
        let mut out = io::stdout();
        self.run_with(CrosstermKeyReader::new(), CrosstermScreen::new(), &mut out)
    }

    /// Run with injected collaborators. Returns once Exit is selected, or
    /// with the first I/O error raised by a collaborator.
    pub fn run_with<K, S, W>(
        &mut self,
        mut keys: K,
        mut screen: S,
        out: &mut W,
    ) -> Result<(), MenuError>
    where
        K: KeyReader,
        S: ScreenClearer,
        W: Write,
    {
        let mut session = RunSession::begin(self);
        session.drive(&mut keys, &mut screen, out)
    }

    /// Apply one row of the transition table. Select on the last entry only
    /// means Exit while a run is active.
    pub fn handle_key(&mut self, key: char) -> Step {
        let Some(cursor) = self.cursor else {
            return Step::Ignored;
        };
        let last = self.entries.len() - 1;

        let step = match self.keybinds.action_for(key) {
            NavAction::Up if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Step::Moved(cursor - 1)
            }
            NavAction::Down if cursor < last => {
                self.cursor = Some(cursor + 1);
                Step::Moved(cursor + 1)
            }
            NavAction::Up | NavAction::Down => Step::Stayed,
            NavAction::Select if self.state == MenuState::Running && cursor == last => Step::Exit,
            NavAction::Select => Step::Invoke(cursor),
            NavAction::None => Step::Ignored,
        };
        trace!(key = ?key, ?step, "Handled key");
        step
    }
}

/// Holds the widget for the duration of one run
struct RunSession<'a> {
    menu: &'a mut MenuWidget,
}

impl<'a> RunSession<'a> {
    fn begin(menu: &'a mut MenuWidget) -> Self {
        menu.entries.push(MenuEntry::new(EXIT_LABEL, Action::noop()));
        menu.cursor = Some(0);
        menu.state = MenuState::Running;
        debug!(fields = menu.entries.len() - 1, "Menu run started");
        Self { menu }
    }

    fn drive<K, S, W>(
        &mut self,
        keys: &mut K,
        screen: &mut S,
        out: &mut W,
    ) -> Result<(), MenuError>
    where
        K: KeyReader,
        S: ScreenClearer,
        W: Write,
    {
        loop {
            screen.clear()?;
            self.menu.write_instructions(out)?;
            self.menu.render_menu(out)?;
            out.flush()?;

            let key = keys.read_key()?;
            match self.menu.handle_key(key) {
                Step::Exit => return Ok(()),
                Step::Invoke(index) => {
                    screen.clear()?;
                    let entry = &self.menu.entries[index];
                    let action = entry.action.clone();
                    debug!(label = %entry.label, index, "Invoking menu action");
                    action.invoke();
                    if self.menu.wait_after_action {
                        out.flush()?;
                        keys.read_key()?;
                    }
                }
                Step::Moved(_) | Step::Stayed | Step::Ignored => {}
            }
        }
    }
}

impl Drop for RunSession<'_> {
    fn drop(&mut self) {
        self.menu.entries.pop();
        self.menu.reset_cursor();
        self.menu.state = MenuState::Idle;
        debug!(fields = self.menu.entries.len(), "Menu run finished");
    }
}
