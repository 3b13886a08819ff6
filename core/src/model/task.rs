use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    /// Sort key: lower rank sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Assigned by the store at creation, unique for the store's lifetime,
    /// never reused after deletion.
    pub id: u64,
    pub title: String,
    pub description: String,

    // The store accepts any well-typed value; parsing and validating the
    // user's YYYY-MM-DD input is the presentation layer's job.
    pub due: Option<NaiveDate>,

    pub priority: Priority,

    // Monotonic: flipped to true by TaskStore::complete, never reset.
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(
        id: u64,
        title: String,
        description: String,
        due: Option<NaiveDate>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title,
            description,
            due,
            priority,
            completed: false,
        }
    }
}
