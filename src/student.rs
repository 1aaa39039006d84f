//! Mock student generation
//!
//! Students are a pure function of their generation index. The avatar image is
//! picked from an injected palette, so the generator needs no rendering
//! environment and always produces the same output for the same window.

use serde::{Deserialize, Serialize};

/// Number of images in the default avatar palette
pub const PALETTE_SIZE: usize = 20;

/// Stride used to spread consecutive students across the palette
const AVATAR_STRIDE: usize = 7;

/// A generated roster member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Stable identifier (`student-{index}`)
    pub id: String,
    /// Display name (`Student {index + 1}`)
    pub name: String,
    /// Contact address
    pub email: String,
    /// Opaque image reference from the avatar palette
    pub avatar: String,
}

/// Immutable table of avatar image references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPalette {
    images: Vec<String>,
}

impl AvatarPalette {
    /// Build a palette from explicit image references
    ///
    /// Returns `None` for an empty table, since every student needs an avatar.
    pub fn new(images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            None
        } else {
            Some(Self { images })
        }
    }

    /// Number of images in the palette
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the palette is empty (never true for a constructed palette)
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Palette slot used by the student at `index`
    pub fn slot_for(&self, index: usize) -> usize {
        (index * AVATAR_STRIDE) % self.images.len()
    }

    /// Image reference used by the student at `index`
    pub fn image_for(&self, index: usize) -> &str {
        &self.images[self.slot_for(index)]
    }
}

impl Default for AvatarPalette {
    fn default() -> Self {
        Self {
            images: (1..=PALETTE_SIZE).map(|n| format!("meo{}.png", n)).collect(),
        }
    }
}

impl Student {
    /// Create the student at absolute generation index `index`
    pub fn at_index(index: usize, palette: &AvatarPalette) -> Self {
        Self {
            id: format!("student-{}", index),
            name: format!("Student {}", index + 1),
            email: format!("student{}@example.edu", index + 1),
            avatar: palette.image_for(index).to_string(),
        }
    }
}

/// Generate `count` students starting at absolute index `offset`
pub fn generate(offset: usize, count: usize, palette: &AvatarPalette) -> Vec<Student> {
    (offset..offset + count)
        .map(|i| Student::at_index(i, palette))
        .collect()
}
