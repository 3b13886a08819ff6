use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;

use crate::model::task::Priority;

/// Metadata keys recognized by the quick-add line.
pub const QUICK_ADD_KEYS: &[&str] = &["due", "priority", "description"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub title: String,
    pub metadata: HashMap<String, String>,
}

/// Splits a quick-add line into the title and `key:value` metadata pairs.
/// Bare words (and values whose key is empty, like ":x") join the title.
pub fn parse_quick_add(line: &str) -> ParsedInput {
    let mut title_parts = Vec::new();
    let mut metadata = HashMap::new();

    for word in line.split_whitespace() {
        if let Some((key, value)) = word.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        title_parts.push(word);
    }

    ParsedInput {
        title: title_parts.join(" "),
        metadata,
    }
}

/// Resolves a possibly-abbreviated key against the known keys: exact match
/// wins, otherwise a unique prefix is accepted.
pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|c| c.starts_with(key))
        .copied()
        .collect();

    match matches.as_slice() {
        [only] => Ok(only.to_string()),
        [] => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

pub fn parse_priority(s: &str) -> Result<Priority> {
    match s.to_lowercase().as_str() {
        "h" | "high" => Ok(Priority::High),
        "m" | "medium" | "med" => Ok(Priority::Medium),
        "l" | "low" => Ok(Priority::Low),
        _ => Err(anyhow!("Unknown priority '{}'. Use high, medium or low", s)),
    }
}

/// A fully validated add request, ready to hand to the store. All input
/// checking happens here so the store can stay validation-free.
#[derive(Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn parse(line: &str) -> Result<Self> {
        let parsed = parse_quick_add(line);

        if parsed.title.is_empty() {
            bail!("Title is required!");
        }

        let mut draft = TaskDraft {
            title: parsed.title,
            ..TaskDraft::default()
        };

        for (key, value) in parsed.metadata {
            match expand_key(&key, QUICK_ADD_KEYS)?.as_str() {
                "due" => {
                    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                        .map_err(|_| anyhow!("Invalid date format! Use YYYY-MM-DD"))?;
                    draft.due = Some(date);
                }
                "priority" => draft.priority = parse_priority(&value)?,
                "description" => draft.description = value,
                _ => unreachable!("expand_key only returns known keys"),
            }
        }

        Ok(draft)
    }
}
