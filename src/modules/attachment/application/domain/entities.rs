use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Metadata row for a blob attached to an issue. The blob itself lives
/// in object storage under `object_name`; this service only ever hands
/// out signed URLs for it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IssueAttachment {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub object_name: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}
