//! Saved resources: links, articles, anything worth keeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub url: String,
    /// Free-form label, e.g. "article" or "video".
    pub kind: String,
    pub added_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            url: url.into(),
            kind: "article".to_string(),
            added_at: Utc::now(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

impl Record for Resource {
    const ENTITY: &'static str = "resource";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
