//! UI helper functions

use crate::roster::FooterState;

/// Text shown below the student list
pub fn footer_label(state: FooterState) -> &'static str {
    match state {
        FooterState::Loading => "Loading more…",
        FooterState::Exhausted => "No more students available",
        FooterState::MoreAvailable => "",
    }
}

/// Header line of a course section
pub fn section_header(category: &str) -> String {
    category.to_uppercase()
}
