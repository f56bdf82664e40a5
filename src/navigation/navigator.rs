//! Navigation controller with browser-style history.
//!
//! The controller owns an immutable [`RouteTable`] passed in at construction
//! and an explicit history of visited entries. Navigating resolves the
//! requested path and pushes the outcome; back/forward move a cursor over
//! entries that were already resolved, without re-resolving.

use crate::navigation::table::{RouteTable, ViewRef};

/// One addressable history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Path as requested by the caller.
    pub requested: String,
    /// Path after redirects; what the address bar shows.
    pub canonical: String,
    /// View mounted for this entry.
    pub view: ViewRef,
}

/// Navigation controller for the panel.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    entries: Vec<HistoryEntry>,
    /// Index of the current entry; `None` before the first navigation.
    cursor: Option<usize>,
}

impl Navigator {
    /// Create a controller over an already-compiled table.
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Resolve `path` and push the outcome as the new current entry.
    ///
    /// Entries ahead of the cursor are discarded, matching how a browser
    /// drops the forward stack when navigating from a past entry. Not-found
    /// outcomes are recorded too; the requested path stays addressable while
    /// the not-found view renders.
    pub fn navigate(&mut self, path: &str) -> &HistoryEntry {
        let resolution = self.table.resolve(path);

        tracing::debug!(
            requested = %path,
            canonical = %resolution.canonical_path(),
            view = %resolution.view().name,
            not_found = resolution.is_not_found(),
            "Navigating"
        );

        let entry = HistoryEntry {
            requested: path.to_string(),
            canonical: resolution.canonical_path().to_string(),
            view: resolution.view().clone(),
        };

        match self.cursor {
            Some(index) => self.entries.truncate(index + 1),
            None => self.entries.clear(),
        }
        self.entries.push(entry);
        self.cursor = Some(self.entries.len() - 1);
        &self.entries[self.entries.len() - 1]
    }

    /// Move back one entry, if there is one.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        let index = self.cursor?;
        if index == 0 {
            return None;
        }
        self.cursor = Some(index - 1);
        self.entries.get(index - 1)
    }

    /// Move forward one entry, if one was left by going back.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        let index = self.cursor?;
        if index + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(index + 1);
        self.entries.get(index + 1)
    }

    /// The entry currently mounted.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor?)
    }

    /// The table this controller resolves against.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Number of entries in history.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PanelConfig;
    use crate::navigation::table::RouteTable;

    fn navigator() -> Navigator {
        let config = PanelConfig::default();
        Navigator::new(RouteTable::from_config(&config.routes, &config.navigation))
    }

    #[test]
    fn test_navigate_records_canonical_path() {
        let mut nav = navigator();
        let entry = nav.navigate("/");
        assert_eq!(entry.requested, "/");
        assert_eq!(entry.canonical, "/login");
        assert_eq!(entry.view.name, "Login");
    }

    #[test]
    fn test_back_and_forward_walk_history() {
        let mut nav = navigator();
        nav.navigate("/login");
        nav.navigate("/dashboard");
        nav.navigate("/students");

        assert_eq!(nav.back().unwrap().view.name, "Dashboard");
        assert_eq!(nav.back().unwrap().view.name, "Login");
        assert!(nav.back().is_none());
        assert_eq!(nav.forward().unwrap().view.name, "Dashboard");
        assert_eq!(nav.forward().unwrap().view.name, "Students");
        assert!(nav.forward().is_none());
    }

    #[test]
    fn test_navigating_from_past_drops_forward_stack() {
        let mut nav = navigator();
        nav.navigate("/login");
        nav.navigate("/dashboard");
        nav.navigate("/students");
        nav.back();
        nav.back();

        nav.navigate("/fees");
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.current().unwrap().view.name, "Fees");
        assert!(nav.forward().is_none());
        assert_eq!(nav.back().unwrap().view.name, "Login");
    }

    #[test]
    fn test_not_found_navigation_is_recorded() {
        let mut nav = navigator();
        nav.navigate("/nope");
        let current = nav.current().unwrap();
        assert_eq!(current.view.name, "NotFound");
        assert_eq!(current.canonical, "/nope");
    }
}
