//! Request validation for item payloads and path identifiers.
//!
//! # Design
//! Validation runs on raw `serde_json::Value`s rather than through serde's
//! derive so that every problem in a request is reported, not just the first
//! one serde trips over. Each problem becomes a `FieldIssue`; the transport
//! layer renders a `ValidationError` as a single
//! `"Invalid input: a, b"` message with a 400 status.
//!
//! Unknown keys are ignored and dropped from the validated value.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::model::{CreateItem, Item, ItemId, UpdateItem};

const MSG_REQUIRED: &str = "Required";
const MSG_EMPTY_TEXT: &str = "Text cannot be empty";
const MSG_BAD_ID: &str = "ID must be a valid UUID";
const MSG_BAD_DATE: &str = "Invalid date";
const MSG_DATE_ORDER: &str = "updatedAt cannot precede createdAt";

/// One field-level problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// A failure that is not tied to a field, e.g. an unparseable body.
    pub fn body(message: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new("body", message)])
    }

    /// The path identifier could not be read at all, e.g. it does not decode
    /// to UTF-8.
    pub fn bad_id() -> Self {
        Self::new(vec![FieldIssue::new("id", MSG_BAD_ID)])
    }

    pub fn message(&self) -> String {
        join_issues(&self.issues)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    let joined = issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Invalid input: {joined}")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(kind: &str, got: &Value) -> String {
    format!("Expected {kind}, received {}", type_name(got))
}

fn as_object<'a>(body: &'a Value, issues: &mut Vec<FieldIssue>) -> Option<&'a Map<String, Value>> {
    match body {
        Value::Object(map) => Some(map),
        other => {
            issues.push(FieldIssue::new("body", expected("object", other)));
            None
        }
    }
}

fn text_field(map: &Map<String, Value>, required: bool, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match map.get("text") {
        None if required => {
            issues.push(FieldIssue::new("text", MSG_REQUIRED));
            None
        }
        None => None,
        Some(Value::String(text)) if text.is_empty() => {
            issues.push(FieldIssue::new("text", MSG_EMPTY_TEXT));
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            issues.push(FieldIssue::new("text", expected("string", other)));
            None
        }
    }
}

fn is_done_field(map: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<bool> {
    match map.get("isDone") {
        None => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(other) => {
            issues.push(FieldIssue::new("isDone", expected("boolean", other)));
            None
        }
    }
}

fn timestamp_field(map: &Map<String, Value>, key: &str, issues: &mut Vec<FieldIssue>) -> Option<DateTime<Utc>> {
    match map.get(key) {
        None => {
            issues.push(FieldIssue::new(key, MSG_REQUIRED));
            None
        }
        Some(Value::String(raw)) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(_) => {
                issues.push(FieldIssue::new(key, MSG_BAD_DATE));
                None
            }
        },
        Some(other) => {
            issues.push(FieldIssue::new(key, expected("date", other)));
            None
        }
    }
}

/// Only the canonical hyphenated form is accepted; `Uuid::parse_str` alone
/// would also take the simple, braced, and URN spellings.
fn parse_id(raw: &str) -> Option<ItemId> {
    let id = Uuid::try_parse(raw).ok()?;
    let canonical = id.hyphenated().to_string();
    canonical.eq_ignore_ascii_case(raw).then_some(id)
}

fn check_id(raw: &str, issues: &mut Vec<FieldIssue>) -> Option<ItemId> {
    let id = parse_id(raw);
    if id.is_none() {
        issues.push(FieldIssue::new("id", MSG_BAD_ID));
    }
    id
}

fn check_create(body: &Value, issues: &mut Vec<FieldIssue>) -> Option<CreateItem> {
    let map = as_object(body, issues)?;
    let before = issues.len();
    let text = text_field(map, true, issues);
    let is_done = is_done_field(map, issues);
    if issues.len() > before {
        return None;
    }
    Some(CreateItem {
        text: text?,
        is_done: Some(is_done.unwrap_or(false)),
    })
}

fn check_update(body: &Value, issues: &mut Vec<FieldIssue>) -> Option<UpdateItem> {
    let map = as_object(body, issues)?;
    let before = issues.len();
    let text = text_field(map, false, issues);
    let is_done = is_done_field(map, issues);
    (issues.len() == before).then_some(UpdateItem { text, is_done })
}

fn finish<T>(value: Option<T>, issues: Vec<FieldIssue>) -> Result<T, ValidationError> {
    match value {
        Some(value) if issues.is_empty() => Ok(value),
        _ => Err(ValidationError::new(issues)),
    }
}

pub fn validate_item_id(raw: &str) -> Result<ItemId, ValidationError> {
    let mut issues = Vec::new();
    let id = check_id(raw, &mut issues);
    finish(id, issues)
}

/// `text` required and non-empty; `isDone` optional, defaulting to `false`.
pub fn validate_create(body: &Value) -> Result<CreateItem, ValidationError> {
    let mut issues = Vec::new();
    let input = check_create(body, &mut issues);
    finish(input, issues)
}

/// Both fields optional; `text` must be non-empty when present.
pub fn validate_update(body: &Value) -> Result<UpdateItem, ValidationError> {
    let mut issues = Vec::new();
    let patch = check_update(body, &mut issues);
    finish(patch, issues)
}

/// Validates the path identifier and the patch together so one response
/// reports every problem, identifier first.
pub fn validate_update_request(raw_id: &str, body: &Value) -> Result<(ItemId, UpdateItem), ValidationError> {
    let mut issues = Vec::new();
    let id = check_id(raw_id, &mut issues);
    let patch = check_update(body, &mut issues);
    finish(id.zip(patch), issues)
}

/// Validates a full serialized `Item`, as returned by the API.
pub fn validate_item(value: &Value) -> Result<Item, ValidationError> {
    let mut issues = Vec::new();
    let Some(map) = as_object(value, &mut issues) else {
        return Err(ValidationError::new(issues));
    };

    let id = match map.get("id") {
        None => {
            issues.push(FieldIssue::new("id", MSG_REQUIRED));
            None
        }
        Some(Value::String(raw)) => check_id(raw, &mut issues),
        Some(other) => {
            issues.push(FieldIssue::new("id", expected("string", other)));
            None
        }
    };
    let text = text_field(map, true, &mut issues);
    let is_done = is_done_field(map, &mut issues);
    let created_at = timestamp_field(map, "createdAt", &mut issues);
    let updated_at = timestamp_field(map, "updatedAt", &mut issues);

    if let (Some(created), Some(updated)) = (created_at, updated_at) {
        if updated < created {
            issues.push(FieldIssue::new("updatedAt", MSG_DATE_ORDER));
        }
    }
    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    match (id, text, created_at, updated_at) {
        (Some(id), Some(text), Some(created_at), Some(updated_at)) => Ok(Item {
            id,
            text,
            is_done: is_done.unwrap_or(false),
            created_at,
            updated_at,
        }),
        _ => Err(ValidationError::new(issues)),
    }
}
