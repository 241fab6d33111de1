use serde::{Deserialize, Deserializer, Serialize};

/// Closed-won sales lead as read from the backend. Snapshot only, never
/// written back.
#[derive(Debug, Clone, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "text_or_none")]
    pub email_from: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub phone: Option<String>,
    pub probability: f64,
}

/// Contact record as returned by the CRM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewContact {
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Project creation payload. `notes` carries the provenance string so a
/// project can be traced back to its source lead.
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
    pub notes: String,
    #[serde(rename = "contactId")]
    pub contact_id: String,
}

impl NewProject {
    pub fn from_lead(lead: &Lead, contact_id: String) -> Self {
        Self {
            name: lead.name.clone(),
            notes: format!("Imported from Odoo lead ID: {}", lead.id),
            contact_id,
        }
    }
}

/// Aggregate outcome of one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub total: usize,
    pub synced: usize,
    pub skipped: usize,
    pub failed: usize,
}

// The backend encodes unset char fields as JSON `false`. Fold that, null
// and whitespace-only strings into None.
fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Ok(Some(s)),
        serde_json::Value::String(_) | serde_json::Value::Bool(false) | serde_json::Value::Null => {
            Ok(None)
        }
        other => Err(serde::de::Error::custom(format!(
            "expected string or false, got: {}",
            other
        ))),
    }
}
