use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// One observation of a work unit as returned by the context service.
///
/// Several raw records may describe the same logical task (pause/resume).
/// `notes` is kept as raw JSON so schema drift on the service side does not
/// break decoding; it is parsed per record during consolidation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContext {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Box<RawValue>>,
    #[serde(default, alias = "ownerId", skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(default, alias = "id", skip_serializing_if = "String::is_empty")]
    pub context_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_context: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note_string: String,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created: String,
    /// Same format as `created`; empty while the context is still open.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub completed: String,
}

impl RawContext {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(id: &str, name: &str, parent_id: &str, created: &str, completed: &str) -> Self {
        Self {
            name: name.to_string(),
            context_id: id.to_string(),
            parent_id: parent_id.to_string(),
            created: created.to_string(),
            completed: completed.to_string(),
            ..Default::default()
        }
    }

    /// Attach notes given as a raw JSON payload.
    pub fn with_notes_json(mut self, json: &str) -> serde_json::Result<Self> {
        self.notes = Some(RawValue::from_string(json.to_string())?);
        Ok(self)
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.user_id = owner.to_string();
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.completed.is_empty()
    }

    /// Decode the notes payload into a list of strings.
    /// An absent (or empty/null) payload is an empty list.
    pub fn parse_notes(&self) -> serde_json::Result<Vec<String>> {
        match &self.notes {
            None => Ok(Vec::new()),
            Some(raw) if raw.get().trim() == "null" => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw.get()),
        }
    }
}
