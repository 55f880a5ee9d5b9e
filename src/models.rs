//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
///
/// `id` is assigned by the backend and never changes; a committed
/// title is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}
