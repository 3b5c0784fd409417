use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Environmental,
    PublicService,
    Community,
    System,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Environmental => "environmental",
            NotificationCategory::PublicService => "public_service",
            NotificationCategory::Community => "community",
            NotificationCategory::System => "system",
        }
    }
}

/// Everything the platform currently notifies citizens about. Each
/// variant carries the data its template interpolates.
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    Welcome {
        user_id: Uuid,
        username: String,
    },
    IssueReported {
        user_id: Uuid,
        issue_id: Uuid,
        issue_title: String,
    },
    IssueInProgress {
        user_id: Uuid,
        issue_id: Uuid,
        issue_title: String,
    },
    IssueResolved {
        user_id: Uuid,
        issue_id: Uuid,
        issue_title: String,
    },
}

impl NotificationEvent {
    pub fn user_id(&self) -> Uuid {
        match self {
            NotificationEvent::Welcome { user_id, .. }
            | NotificationEvent::IssueReported { user_id, .. }
            | NotificationEvent::IssueInProgress { user_id, .. }
            | NotificationEvent::IssueResolved { user_id, .. } => *user_id,
        }
    }

    pub fn issue_id(&self) -> Option<Uuid> {
        match self {
            NotificationEvent::Welcome { .. } => None,
            NotificationEvent::IssueReported { issue_id, .. }
            | NotificationEvent::IssueInProgress { issue_id, .. }
            | NotificationEvent::IssueResolved { issue_id, .. } => Some(*issue_id),
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            NotificationEvent::Welcome { .. } => "welcome_message",
            NotificationEvent::IssueReported { .. } => "citizen_issue_reported",
            NotificationEvent::IssueInProgress { .. } => "citizen_issue_in_progress",
            NotificationEvent::IssueResolved { .. } => "citizen_issue_resolved",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub issue_id: Option<Uuid>,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub event_type: String,
    /// 1 (informational) .. 5 (urgent)
    pub urgency_level: i32,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
