//! Screen state structures for TUI

use crate::courses::CourseDirectory;
use chrono::{DateTime, Local};

/// Student list screen state
#[derive(Debug)]
pub struct StudentListScreen {
    /// Selected student index
    pub selected_index: usize,
    /// Status message
    pub status_message: Option<String>,
    /// When the last refresh was requested
    pub last_refreshed: Option<DateTime<Local>>,
}

impl StudentListScreen {
    /// Create new student list screen
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            status_message: None,
            last_refreshed: None,
        }
    }

    /// Move to next student (stops at the last one)
    pub fn next(&mut self, student_count: usize) {
        if student_count > 0 && self.selected_index + 1 < student_count {
            self.selected_index += 1;
        }
    }

    /// Move to previous student (stops at the first one)
    pub fn previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Jump back to the top of the list
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Keep the selection inside a list of `student_count` rows
    pub fn clamp(&mut self, student_count: usize) {
        if student_count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= student_count {
            self.selected_index = student_count - 1;
        }
    }

    /// Whether the selection is within `threshold` rows of the end
    pub fn is_near_end(&self, student_count: usize, threshold: usize) -> bool {
        student_count == 0 || self.selected_index + threshold >= student_count
    }

    /// Record a refresh request
    pub fn mark_refreshed(&mut self, at: DateTime<Local>) {
        self.last_refreshed = Some(at);
        self.status_message = Some(format!("Refreshed at {}", at.format("%H:%M:%S")));
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

impl Default for StudentListScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Student detail screen state
#[derive(Debug)]
pub struct StudentDetailScreen {
    /// Identifier of the opened student
    pub student_id: String,
    /// Display name handed over by navigation (not checked against the roster)
    pub name: Option<String>,
    /// Course search state
    pub directory: CourseDirectory,
}

impl StudentDetailScreen {
    /// Create new detail screen
    pub fn new(student_id: String, name: Option<String>) -> Self {
        Self {
            student_id,
            name,
            directory: CourseDirectory::new(),
        }
    }

    /// Header text: the passed name, or a generic label when missing
    pub fn title(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Student",
        }
    }

    /// Add character to search query
    pub fn add_char(&mut self, c: char) {
        self.directory.push_char(c);
    }

    /// Remove last character from search query
    pub fn backspace(&mut self) {
        self.directory.pop_char();
    }

    /// Clear search query
    pub fn clear(&mut self) {
        self.directory.clear();
    }
}
