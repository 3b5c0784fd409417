use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A category of civic issue (pothole, street light, waste, ...).
/// Administrators curate the list; citizens pick from it when filing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IssueType {
    pub id: Uuid,
    pub name: String,
    /// Optional template shown to the reporter when this type is picked.
    pub sample_form: Option<String>,
    pub created_at: DateTime<Utc>,
}
