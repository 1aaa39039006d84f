//! Serialized roster snapshot
//!
//! The whole roster is stored as one JSON array of student records. There is
//! no schema version inside the blob; changing the record shape means bumping
//! the key.

use crate::{student::Student, Result};

/// Storage key of the roster snapshot
pub const ROSTER_KEY: &str = "students:list:v2";

/// Serialize a roster into the persisted blob
pub fn encode(students: &[Student]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(students)?)
}

/// Parse a persisted blob back into a roster
pub fn decode(bytes: &[u8]) -> Result<Vec<Student>> {
    Ok(serde_json::from_slice(bytes)?)
}
