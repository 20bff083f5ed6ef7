//! Open/closed bookkeeping for the workspace's modal panels.
//!
//! Each overlay is an independent boolean, like the per-panel flags in the
//! GUI shell this core backs. The state is serializable so a host can poll
//! it the same way it polls timer snapshots.

use serde::{Deserialize, Serialize};

/// A modal panel of the workspace shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    NoteEditor,
    Chat,
    TodoList,
    PomodoroTimer,
    ProjectManager,
    Search,
    WebSearch,
    Login,
}

/// Which overlays are currently open.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceShell {
    open: Vec<Overlay>,
}

impl WorkspaceShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open.contains(&overlay)
    }

    pub fn open(&mut self, overlay: Overlay) {
        if !self.is_open(overlay) {
            self.open.push(overlay);
        }
    }

    pub fn close(&mut self, overlay: Overlay) {
        self.open.retain(|o| *o != overlay);
    }

    /// Flip the overlay; returns whether it is open afterwards.
    pub fn toggle(&mut self, overlay: Overlay) -> bool {
        if self.is_open(overlay) {
            self.close(overlay);
            false
        } else {
            self.open(overlay);
            true
        }
    }

    pub fn close_all(&mut self) {
        self.open.clear();
    }

    /// Open overlays, in the order they were opened.
    pub fn open_overlays(&self) -> &[Overlay] {
        &self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_are_independent() {
        let mut shell = WorkspaceShell::new();
        shell.open(Overlay::Chat);
        shell.open(Overlay::TodoList);
        assert!(shell.is_open(Overlay::Chat));
        assert!(shell.is_open(Overlay::TodoList));
        assert!(!shell.is_open(Overlay::Search));

        shell.close(Overlay::Chat);
        assert!(!shell.is_open(Overlay::Chat));
        assert!(shell.is_open(Overlay::TodoList));
    }

    #[test]
    fn open_is_idempotent() {
        let mut shell = WorkspaceShell::new();
        shell.open(Overlay::Search);
        shell.open(Overlay::Search);
        assert_eq!(shell.open_overlays().len(), 1);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut shell = WorkspaceShell::new();
        assert!(shell.toggle(Overlay::PomodoroTimer));
        assert!(!shell.toggle(Overlay::PomodoroTimer));
        assert!(!shell.is_open(Overlay::PomodoroTimer));
    }

    #[test]
    fn close_all_empties_the_shell() {
        let mut shell = WorkspaceShell::new();
        shell.open(Overlay::Chat);
        shell.open(Overlay::Login);
        shell.close_all();
        assert!(shell.open_overlays().is_empty());
    }
}
