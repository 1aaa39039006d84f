//! Core types for TUI screens and navigation

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Scrollable list of students
    StudentList,
    /// Courses of one student
    StudentDetail,
}

impl Screen {
    /// Get display label for screen
    pub fn label(&self) -> &'static str {
        match self {
            Self::StudentList => "Students",
            Self::StudentDetail => "Student",
        }
    }

    /// Get key help for screen
    pub fn help(&self) -> &'static str {
        match self {
            Self::StudentList => "↑↓/j/k: Navigate | Enter: Open | r/F5: Refresh | q/Esc: Quit",
            Self::StudentDetail => "Type to search | Backspace: Delete | Del: Clear | Esc: Back",
        }
    }
}
