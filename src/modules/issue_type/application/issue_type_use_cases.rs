use std::sync::Arc;

use crate::issue_type::application::ports::incoming::use_cases::{
    CreateIssueTypeUseCase, DeleteIssueTypeUseCase, GetIssueTypesUseCase,
};

/// The module's use cases bundled for AppState.
#[derive(Clone)]
pub struct IssueTypeUseCases {
    pub create: Arc<dyn CreateIssueTypeUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetIssueTypesUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteIssueTypeUseCase + Send + Sync>,
}
