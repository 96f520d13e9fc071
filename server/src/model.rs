//! Item domain types.
//!
//! # Design
//! `Item` is the only entity. Its identifier and `created_at` are assigned by
//! the store and never change afterwards; `updated_at` moves forward on every
//! successful mutation. The wire format is camelCase to match the browser
//! client (`isDone`, `createdAt`, `updatedAt`).

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ItemId = Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[schemars(length(min = 1))]
    pub text: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating an item. `is_done` defaults to `false` when
/// absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[schemars(length(min = 1))]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "bool")]
    pub is_done: Option<bool>,
}

/// Validated partial patch. Only present fields are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "String")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "bool")]
    pub is_done: Option<bool>,
}

impl Item {
    /// Builds a fresh record with a new v4 id and both timestamps set to `now`.
    pub fn new(input: CreateItem, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: input.text,
            is_done: input.is_done.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateItem {
    /// Merges the present fields over `item` and stamps `updated_at`.
    ///
    /// `now` is clamped so `updated_at` never moves backwards past
    /// `created_at` if the wall clock steps back.
    pub fn apply(&self, item: &mut Item, now: DateTime<Utc>) {
        if let Some(text) = &self.text {
            item.text = text.clone();
        }
        if let Some(is_done) = self.is_done {
            item.is_done = is_done;
        }
        item.updated_at = now.max(item.created_at);
    }
}
