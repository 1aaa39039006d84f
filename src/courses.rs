//! Course directory
//!
//! A fixed catalog of mock courses, filtered by a live search query and
//! grouped by category for sectioned display.

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    /// Stable identifier
    pub id: &'static str,
    /// Course title (searched by the filter)
    pub title: &'static str,
    /// Human-readable length
    pub duration: &'static str,
    /// Category label used for grouping
    pub category: &'static str,
}

/// The built-in course catalog
pub static CATALOG: [Course; 6] = [
    Course { id: "c-1", title: "Intro to JavaScript", duration: "6 weeks", category: "Programming" },
    Course { id: "c-2", title: "Advanced React Native", duration: "8 weeks", category: "Programming" },
    Course { id: "c-3", title: "UI/UX Fundamentals", duration: "4 weeks", category: "Design" },
    Course { id: "c-4", title: "Visual Design Basics", duration: "5 weeks", category: "Design" },
    Course { id: "c-5", title: "Calculus I", duration: "10 weeks", category: "Math" },
    Course { id: "c-6", title: "Linear Algebra", duration: "9 weeks", category: "Math" },
];

/// Courses sharing one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Category label
    pub category: &'static str,
    /// Matching courses in catalog order
    pub courses: Vec<Course>,
}

/// Select courses whose title contains `query` and group them by category
///
/// Matching is case-insensitive on the trimmed query. Categories appear in the
/// order they are first seen in the catalog; empty categories are left out.
pub fn filter_sections(catalog: &[Course], query: &str) -> Vec<Section> {
    let needle = query.trim().to_lowercase();
    let mut sections: Vec<Section> = Vec::new();

    for course in catalog
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&needle))
    {
        match sections.iter_mut().find(|s| s.category == course.category) {
            Some(section) => section.courses.push(*course),
            None => sections.push(Section {
                category: course.category,
                courses: vec![*course],
            }),
        }
    }

    sections
}

/// Search state over a catalog, recomputed only when the query changes
#[derive(Debug, Clone)]
pub struct CourseDirectory {
    catalog: &'static [Course],
    query: String,
    sections: Vec<Section>,
    recomputations: usize,
}

impl CourseDirectory {
    /// Directory over the built-in catalog with an empty query
    pub fn new() -> Self {
        Self::with_catalog(&CATALOG)
    }

    /// Directory over a custom catalog with an empty query
    pub fn with_catalog(catalog: &'static [Course]) -> Self {
        Self {
            catalog,
            query: String::new(),
            sections: filter_sections(catalog, ""),
            recomputations: 1,
        }
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sections for the current query
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total number of matching courses
    pub fn match_count(&self) -> usize {
        self.sections.iter().map(|s| s.courses.len()).sum()
    }

    /// How many times the sections were computed
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Replace the query; sections are recomputed only if the text differs
    pub fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.recompute();
    }

    /// Append a character to the query
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.recompute();
    }

    /// Remove the last character of the query
    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.recompute();
        }
    }

    /// Clear the query
    pub fn clear(&mut self) {
        self.set_query("");
    }

    fn recompute(&mut self) {
        self.sections = filter_sections(self.catalog, &self.query);
        self.recomputations += 1;
    }
}

impl Default for CourseDirectory {
    fn default() -> Self {
        Self::new()
    }
}
