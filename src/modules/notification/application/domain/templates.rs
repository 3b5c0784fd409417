use super::entities::{NotificationCategory, NotificationEvent};

/// Rendered notification content, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNotification {
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub urgency_level: i32,
}

/// One template per event type. Text lives here, in one place, instead
/// of scattered through the modules that raise the events.
pub fn render(event: &NotificationEvent) -> RenderedNotification {
    match event {
        NotificationEvent::Welcome { username, .. } => RenderedNotification {
            title: "Welcome to CiviCare".to_string(),
            message: format!(
                "Hi {}, your account is ready. Report issues in your area and follow their progress here.",
                username
            ),
            category: NotificationCategory::System,
            urgency_level: 1,
        },

        NotificationEvent::IssueReported {
            issue_title,
            issue_id,
            ..
        } => RenderedNotification {
            title: "Issue Reported Successfully".to_string(),
            message: format!(
                "Your issue '{}' has been registered. Tracking ID: {}",
                issue_title, issue_id
            ),
            category: NotificationCategory::PublicService,
            urgency_level: 1,
        },

        NotificationEvent::IssueInProgress { issue_title, .. } => RenderedNotification {
            title: "Issue In Progress".to_string(),
            message: format!("Work on your issue '{}' has started.", issue_title),
            category: NotificationCategory::PublicService,
            urgency_level: 2,
        },

        NotificationEvent::IssueResolved { issue_title, .. } => RenderedNotification {
            title: "Issue Resolved!".to_string(),
            message: format!(
                "Great news! Your issue '{}' has been resolved. Please provide feedback.",
                issue_title
            ),
            category: NotificationCategory::PublicService,
            urgency_level: 2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_welcome_interpolates_username() {
        let rendered = render(&NotificationEvent::Welcome {
            user_id: Uuid::new_v4(),
            username: "amina".to_string(),
        });

        assert_eq!(rendered.title, "Welcome to CiviCare");
        assert!(rendered.message.contains("amina"));
        assert_eq!(rendered.category, NotificationCategory::System);
    }

    #[test]
    fn test_issue_reported_carries_tracking_id() {
        let issue_id = Uuid::new_v4();
        let rendered = render(&NotificationEvent::IssueReported {
            user_id: Uuid::new_v4(),
            issue_id,
            issue_title: "Broken street light".to_string(),
        });

        assert!(rendered.message.contains("Broken street light"));
        assert!(rendered.message.contains(&issue_id.to_string()));
    }

    #[test]
    fn test_resolved_asks_for_feedback() {
        let rendered = render(&NotificationEvent::IssueResolved {
            user_id: Uuid::new_v4(),
            issue_id: Uuid::new_v4(),
            issue_title: "Pothole on Main St".to_string(),
        });

        assert!(rendered.message.contains("resolved"));
        assert!(rendered.message.to_lowercase().contains("feedback"));
    }
}
