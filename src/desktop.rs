//! Window manager for the past-era desktop: a start menu, desktop icons that
//! open windows, and a taskbar. Only one window is active at a time.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopWindow {
    pub name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub const DESKTOP_WINDOWS: [DesktopWindow; 3] = [
    DesktopWindow {
        name: "about",
        title: "About Me.txt",
        icon: "📄",
    },
    DesktopWindow {
        name: "projects",
        title: "My Projects",
        icon: "📁",
    },
    DesktopWindow {
        name: "contact",
        title: "Contact.exe",
        icon: "✉️",
    },
];

/// Entries in the start menu. `NextEra` leaves the desktop for the present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMenuAction {
    Open(&'static str),
    NextEra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Desktop {
    start_menu_open: bool,
    active: Option<&'static str>,
    // windows with a taskbar entry
    tasks: BTreeSet<&'static str>,
}

fn lookup(name: &str) -> Option<&'static str> {
    DESKTOP_WINDOWS
        .iter()
        .find(|w| w.name == name)
        .map(|w| w.name)
}

impl Desktop {
    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    pub fn active_window(&self) -> Option<&'static str> {
        self.active
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active == Some(name)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().copied()
    }

    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Unknown window names are ignored.
    pub fn open_window(&mut self, name: &str) {
        if let Some(name) = lookup(name) {
            self.active = Some(name);
            self.tasks.insert(name);
        }
    }

    pub fn close_window(&mut self, name: &str) {
        if self.is_active(name) {
            self.active = None;
        }
        self.tasks.remove(name);
    }

    /// Hides the window but keeps its taskbar entry.
    pub fn minimize_window(&mut self, name: &str) {
        if self.is_active(name) {
            self.active = None;
        }
    }

    pub fn toggle_window(&mut self, name: &str) {
        if self.is_active(name) {
            self.minimize_window(name);
        } else {
            self.open_window(name);
        }
    }

    /// Runs a start menu entry and closes the menu. Returns `true` when the
    /// entry asks to move on to the next era.
    pub fn run(&mut self, action: StartMenuAction) -> bool {
        self.close_start_menu();
        match action {
            StartMenuAction::Open(name) => {
                self.open_window(name);
                false
            }
            StartMenuAction::NextEra => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_active_window() {
        let mut desktop = Desktop::default();
        desktop.open_window("about");
        desktop.open_window("projects");
        assert_eq!(desktop.active_window(), Some("projects"));
        assert!(!desktop.is_active("about"));
        assert_eq!(desktop.tasks().collect::<Vec<_>>(), vec!["about", "projects"]);
    }

    #[test]
    fn test_minimize_and_toggle() {
        let mut desktop = Desktop::default();
        desktop.open_window("contact");
        desktop.toggle_window("contact");
        assert_eq!(desktop.active_window(), None);
        assert_eq!(desktop.tasks().collect::<Vec<_>>(), vec!["contact"]);

        desktop.toggle_window("contact");
        assert!(desktop.is_active("contact"));
    }

    #[test]
    fn test_close_removes_task() {
        let mut desktop = Desktop::default();
        desktop.open_window("about");
        desktop.close_window("about");
        assert_eq!(desktop.active_window(), None);
        assert_eq!(desktop.tasks().count(), 0);
    }

    #[test]
    fn test_unknown_window_ignored() {
        let mut desktop = Desktop::default();
        desktop.open_window("solitaire");
        assert_eq!(desktop, Desktop::default());
    }

    #[test]
    fn test_start_menu_actions() {
        let mut desktop = Desktop::default();
        desktop.toggle_start_menu();
        assert!(desktop.is_start_menu_open());
        assert!(!desktop.run(StartMenuAction::Open("projects")));
        assert!(!desktop.is_start_menu_open());
        assert!(desktop.is_active("projects"));

        desktop.toggle_start_menu();
        assert!(desktop.run(StartMenuAction::NextEra));
        assert!(!desktop.is_start_menu_open());
    }
}
