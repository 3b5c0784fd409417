use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::issue::application::use_cases::delete_issue::DeleteIssueError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `DELETE /api/issues/{id}` — owner or administrator; attachments and
/// votes cascade.
#[delete("/api/issues/{id}")]
pub async fn delete_issue_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_issue_use_case
        .execute(user.user_id, user.role, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteIssueError::IssueNotFound) => {
            ApiResponse::not_found("ISSUE_NOT_FOUND", "Issue not found")
        }

        Err(DeleteIssueError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to delete this issue")
        }

        Err(DeleteIssueError::RepositoryError(ref e)) => {
            error!(error = %e, "Issue deletion failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::issue::application::use_cases::delete_issue::IDeleteIssueUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{citizen_bearer, test_token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockDeleteSuccess;

    #[async_trait]
    impl IDeleteIssueUseCase for MockDeleteSuccess {
        async fn execute(
            &self,
            _acting_user_id: Uuid,
            _acting_role: UserRole,
            _issue_id: Uuid,
        ) -> Result<(), DeleteIssueError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_delete_issue_204() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_issue(MockDeleteSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(delete_issue_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/issues/{}", Uuid::new_v4()))
            .insert_header(citizen_bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }
}
