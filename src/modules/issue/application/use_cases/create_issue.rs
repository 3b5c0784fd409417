use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::issue::application::ports::outgoing::{
    CreateIssueData, IssueRepository, IssueRepositoryError,
};
use crate::issue::domain::entities::{GeoPoint, GeoPointError, Issue, IssuePriority};
use crate::notification::application::domain::entities::NotificationEvent;
use crate::notification::application::ports::outgoing::citizen_notifier::CitizenNotifier;

//
// ──────────────────────────────────────────────────────────
// Create Issue Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateIssueCommand {
    reporter: Uuid,
    issue_type_id: Uuid,
    title: String,
    description: String,
    priority: IssuePriority,
    location: Option<GeoPoint>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateIssueCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("{0}")]
    InvalidLocation(#[from] GeoPointError),
}

impl CreateIssueCommand {
    /// `reporter` comes from the access token; there is no way for a
    /// request body to choose a different owner.
    pub fn new(
        reporter: Uuid,
        issue_type_id: Uuid,
        title: String,
        description: String,
        priority: Option<IssuePriority>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, CreateIssueCommandError> {
        let title = title.trim().to_string();

        if title.is_empty() {
            return Err(CreateIssueCommandError::EmptyTitle);
        }

        if title.len() > 200 {
            return Err(CreateIssueCommandError::TitleTooLong);
        }

        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(CreateIssueCommandError::EmptyDescription);
        }

        let location = match (latitude, longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)?),
            // Half a coordinate is treated as none; the mobile client
            // sends both or neither
            _ => None,
        };

        Ok(Self {
            reporter,
            issue_type_id,
            title,
            description,
            priority: priority.unwrap_or(IssuePriority::Medium),
            location,
        })
    }

    pub fn reporter(&self) -> Uuid {
        self.reporter
    }

    pub fn issue_type_id(&self) -> Uuid {
        self.issue_type_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> IssuePriority {
        self.priority
    }

    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateIssueError {
    #[error("Issue type not found")]
    IssueTypeNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateIssueUseCase: Send + Sync {
    async fn execute(&self, command: CreateIssueCommand) -> Result<Issue, CreateIssueError>;
}

#[derive(Clone)]
pub struct CreateIssueUseCase<R>
where
    R: IssueRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn CitizenNotifier>,
}

impl<R> CreateIssueUseCase<R>
where
    R: IssueRepository + Send + Sync,
{
    pub fn new(repository: R, notifier: Arc<dyn CitizenNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> ICreateIssueUseCase for CreateIssueUseCase<R>
where
    R: IssueRepository + Send + Sync,
{
    async fn execute(&self, command: CreateIssueCommand) -> Result<Issue, CreateIssueError> {
        let issue = self
            .repository
            .create_issue(CreateIssueData {
                user_id: command.reporter(),
                issue_type_id: command.issue_type_id(),
                title: command.title().to_string(),
                description: command.description().to_string(),
                priority: command.priority(),
                location: command.location(),
            })
            .await
            .map_err(|e| match e {
                IssueRepositoryError::IssueTypeNotFound => CreateIssueError::IssueTypeNotFound,
                other => CreateIssueError::RepositoryError(other.to_string()),
            })?;

        let event = NotificationEvent::IssueReported {
            user_id: issue.user_id,
            issue_id: issue.id,
            issue_title: issue.title.clone(),
        };

        if let Err(e) = self.notifier.notify(event).await {
            warn!(issue_id = %issue.id, "Report confirmation notification failed: {}", e);
        }

        Ok(issue)
    }
}
