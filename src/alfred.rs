//! Alfred Script Filter output types
//!
//! The script filter protocol is a JSON document of selectable rows:
//! `{"items":[{"title","subtitle","arg","icon"?,"valid"?}]}`. Optional
//! fields are omitted entirely when unset, not emitted as null.

use serde::Serialize;

use crate::error::Result;

/// One selectable row in Alfred's results list
#[derive(Debug, Clone, Default, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

/// Icon displayed next to an item
#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    pub path: String,
}

/// Top-level script filter document
#[derive(Debug, Default, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

impl ScriptFilter {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the result list
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Add a non-selectable error row
    pub fn add_error_item(&mut self, message: &str) {
        self.add_item(Item {
            title: format!("Error: {message}"),
            subtitle: "Please check the logs for details".to_string(),
            valid: Some(false),
            ..Item::default()
        });
    }

    /// Serialize to the JSON document Alfred consumes
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
