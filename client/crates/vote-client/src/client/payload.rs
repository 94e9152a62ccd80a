//! Lenient decoding of list payloads.
//!
//! A success response that does not have the expected shape is not an error
//! for the views: they render an empty list instead.

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;
use vote_core::{Candidate, VoteCount};

/// Decode `GET /candidate/vote/count`. Anything but an array yields an empty list.
pub fn vote_counts_from_value(value: Value) -> Vec<VoteCount> {
    match value {
        Value::Array(items) => decode_items(items, "vote count"),
        other => {
            warn!("Expected a vote count list, got {}", kind(&other));
            Vec::new()
        }
    }
}

/// Decode `GET /candidate`. A lone object is treated as a one-element list.
pub fn candidates_from_value(value: Value) -> Vec<Candidate> {
    match value {
        Value::Array(items) => decode_items(items, "candidate"),
        Value::Object(_) => decode_items(vec![value], "candidate"),
        other => {
            warn!("Expected a candidate list, got {}", kind(&other));
            Vec::new()
        }
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Skipping malformed {} entry: {}", what, e);
                None
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
