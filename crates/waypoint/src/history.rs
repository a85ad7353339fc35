//! History strategies, i.e. how the address and the back/forward stack are kept in sync with the active view.
use serde::{Deserialize, Serialize};

/// The state written to the host history on every push or replace.
///
/// Hosts backed by a browser can store it as `history.state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The full address, base included, e.g. `/app/settings?tab=audio`.
    pub current: String,
    /// The address of the entry this one was reached from, if any.
    pub back: Option<String>,
    /// Index of the entry in the session stack.
    pub position: usize,
    /// Whether the entry was written with `replace_state`.
    pub replaced: bool,
}

/// The host history API the controller drives.
pub trait History {
    /// The current address, base included.
    fn location(&self) -> String;

    /// Index of the current entry in the session stack.
    fn position(&self) -> usize;

    fn push_state(&mut self, entry: HistoryEntry);

    fn replace_state(&mut self, entry: HistoryEntry);

    /// Moves through the session stack by `delta` entries.
    ///
    /// Returns the address landed on when the move happens synchronously. Histories that deliver the change later
    /// (a browser fires `popstate` asynchronously) return `None` and the host reports the new address through
    /// [`NavigationController::on_pop_state`](crate::NavigationController::on_pop_state). Moves out of range are
    /// ignored and also return `None`.
    fn go(&mut self, delta: isize) -> Option<String>;
}

/// A [`History`] kept entirely in memory. Useful for tests, servers and non-browser hosts.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl MemoryHistory {
    /// Creates a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                current: initial.into(),
                back: None,
                position: 0,
                replaced: false,
            }],
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a session stack starts with one entry and never shrinks below it.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].current.clone()
    }

    fn position(&self) -> usize {
        self.cursor
    }

    fn push_state(&mut self, entry: HistoryEntry) {
        // Pushing drops everything that was forward of the cursor.
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    fn replace_state(&mut self, entry: HistoryEntry) {
        self.entries[self.cursor] = entry;
    }

    fn go(&mut self, delta: isize) -> Option<String> {
        let target = self.cursor.checked_add_signed(delta)?;
        if delta == 0 || target >= self.entries.len() {
            return None;
        }

        self.cursor = target;
        Some(self.location())
    }
}
