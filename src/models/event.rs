use serde::{Deserialize, Serialize};

/// Wire shape shared by the create body, the PUT patch, and the `details`
/// payload of a fetch response. Fields default to empty strings, so a
/// field omitted from a request body reads the same as one sent empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub message: String,
}

/// An event row scoped to its owner. `owner_id` never leaves the store
/// layer; scoped queries select only these columns.
#[derive(Debug, sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub message: String,
    pub date: String,
}

impl EventRow {
    /// Partial update by omission: only non-empty patch fields replace
    /// the stored values.
    pub fn apply(mut self, patch: EventPayload) -> Self {
        if !patch.name.is_empty() {
            self.name = patch.name;
        }
        if !patch.message.is_empty() {
            self.message = patch.message;
        }
        if !patch.date.is_empty() {
            self.date = patch.date;
        }
        self
    }
}

#[derive(Debug, Serialize)]
pub struct EventCreated {
    pub status: &'static str,
    pub event_name: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EventFetched {
    pub status: &'static str,
    pub event_id: i64,
    pub details: EventPayload,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EventUpdated {
    pub status: &'static str,
    pub event_id: i64,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EventDeleted {
    pub status: &'static str,
    pub event_name: String,
    pub message: &'static str,
}
