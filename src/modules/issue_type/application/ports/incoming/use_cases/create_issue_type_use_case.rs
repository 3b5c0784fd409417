use async_trait::async_trait;

use crate::issue_type::application::domain::entities::IssueType;

//
// ──────────────────────────────────────────────────────────
// Create Issue Type Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateIssueTypeCommand {
    name: String,
    sample_form: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateIssueTypeCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,
}

impl CreateIssueTypeCommand {
    pub fn new(
        name: String,
        sample_form: Option<String>,
    ) -> Result<Self, CreateIssueTypeCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateIssueTypeCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(CreateIssueTypeCommandError::NameTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            sample_form,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_form(&self) -> Option<&String> {
        self.sample_form.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateIssueTypeError {
    #[error("Issue type already exists")]
    IssueTypeAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateIssueTypeUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateIssueTypeCommand,
    ) -> Result<IssueType, CreateIssueTypeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_trims_name() {
        let cmd = CreateIssueTypeCommand::new("  Street Light  ".to_string(), None).unwrap();
        assert_eq!(cmd.name(), "Street Light");
    }

    #[test]
    fn test_command_rejects_empty_name() {
        let result = CreateIssueTypeCommand::new("   ".to_string(), None);
        assert!(matches!(result, Err(CreateIssueTypeCommandError::EmptyName)));
    }

    #[test]
    fn test_command_rejects_long_name() {
        let result = CreateIssueTypeCommand::new("x".repeat(101), None);
        assert!(matches!(
            result,
            Err(CreateIssueTypeCommandError::NameTooLong)
        ));
    }
}
