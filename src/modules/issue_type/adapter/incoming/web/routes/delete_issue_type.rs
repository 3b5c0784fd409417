use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::issue_type::application::ports::incoming::use_cases::DeleteIssueTypeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `DELETE /api/issue_types/{id}` — administrators only; types still
/// referenced by issues cannot be removed.
#[delete("/api/issue_types/{id}")]
pub async fn delete_issue_type_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .issue_type_use_cases
        .delete
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteIssueTypeError::IssueTypeNotFound) => {
            ApiResponse::not_found("ISSUE_TYPE_NOT_FOUND", "Issue type not found")
        }

        Err(DeleteIssueTypeError::IssueTypeInUse) => ApiResponse::conflict(
            "ISSUE_TYPE_IN_USE",
            "Issue type is still referenced by issues",
        ),

        Err(DeleteIssueTypeError::RepositoryError(ref e)) => {
            error!(error = %e, "Issue type deletion failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_type::application::ports::incoming::use_cases::DeleteIssueTypeUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockDeleteInUse;

    #[async_trait]
    impl DeleteIssueTypeUseCase for MockDeleteInUse {
        async fn execute(&self, _issue_type_id: Uuid) -> Result<(), DeleteIssueTypeError> {
            Err(DeleteIssueTypeError::IssueTypeInUse)
        }
    }

    #[actix_web::test]
    async fn test_referenced_type_is_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_issue_type(MockDeleteInUse)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(delete_issue_type_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/issue_types/{}", Uuid::new_v4()))
            .insert_header(admin_bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 409);
    }
}
