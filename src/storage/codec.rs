use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::entity::{parse_timestamp, Note};
use crate::error::Result;

/// Serialize the collection as a JSON array of note records.
pub fn encode(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parse a slot document, repairing what can be repaired and dropping the rest.
///
/// Never fails: a document that is not a JSON array yields an empty collection.
pub fn decode(raw: &str) -> Vec<Note> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "slot document is not valid JSON");
            return Vec::new();
        }
    };

    let records = match value {
        Value::Array(records) => records,
        other => {
            tracing::debug!(kind = value_kind(&other), "slot document is not an array");
            return Vec::new();
        }
    };

    let total = records.len();
    let mut seen = HashSet::new();
    let notes: Vec<Note> = records
        .iter()
        .filter_map(note_from_record)
        .filter(|note| seen.insert(note.id.clone()))
        .collect();

    if notes.len() < total {
        tracing::debug!(dropped = total - notes.len(), "dropped malformed note records");
    }
    notes
}

fn note_from_record(record: &Value) -> Option<Note> {
    let map = record.as_object()?;

    let id = match map.get("id")? {
        Value::String(s) if !s.trim().is_empty() => s.clone(),
        _ => return None,
    };
    let title = text_field(map, "title")?;
    let content = text_field(map, "content")?;
    let (created, updated) = timestamps(
        timestamp_field(map, "created"),
        timestamp_field(map, "updated"),
    )?;

    let note = Note {
        id,
        title,
        content,
        created,
        updated,
    };
    if note.is_blank() {
        return None;
    }
    Some(note)
}

/// Missing or null text becomes empty; any other non-string rejects the record.
fn text_field(map: &Map<String, Value>, name: &str) -> Option<String> {
    match map.get(name) {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => None,
    }
}

fn timestamp_field(map: &Map<String, Value>, name: &str) -> Option<DateTime<Utc>> {
    match map.get(name) {
        Some(Value::String(s)) => parse_timestamp(s),
        _ => None,
    }
}

/// Fill a missing timestamp from the other one and keep `created <= updated`.
fn timestamps(
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    match (created, updated) {
        (Some(c), Some(u)) => Some((c, u.max(c))),
        (Some(c), None) => Some((c, c)),
        (None, Some(u)) => Some((u, u)),
        (None, None) => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
