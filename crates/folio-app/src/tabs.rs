//! Selection state shared by the tabbed sections (about, skills, projects)

/// State for a row of tabs over `len` panels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabGroupState {
    /// Number of tabs
    len: usize,

    /// Currently shown panel
    selected_index: usize,
}

impl TabGroupState {
    /// Starts on the first tab
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> usize {
        self.selected_index
    }

    pub fn is_selected(&self, index: usize) -> bool {
        !self.is_empty() && self.selected_index == index
    }

    /// Select a tab; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Move selection right, wrapping to the first tab
    pub fn select_next(&mut self) {
        if !self.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.len;
        }
    }

    /// Move selection left, wrapping to the last tab
    pub fn select_previous(&mut self) {
        if !self.is_empty() {
            self.selected_index = (self.selected_index + self.len - 1) % self.len;
        }
    }

    /// Change the number of tabs (data loaded later), keeping the
    /// selection when it is still valid
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.selected_index >= len {
            self.selected_index = 0;
        }
    }
}
