//! Default stubs for every use case in `AppState`. Each handler test
//! overrides the one or two it exercises; the rest just need to exist.

use async_trait::async_trait;
use uuid::Uuid;

use crate::attachment::application::use_cases::init_upload::{
    IInitUploadUseCase, InitUploadError, InitUploadResponse,
};
use crate::attachment::application::use_cases::list_attachments::{
    AttachmentWithUrl, IListAttachmentsUseCase, ListAttachmentsError,
};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordPayload, IChangePasswordUseCase,
};
use crate::auth::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::auth::application::use_cases::fetch_user::{FetchUserError, IFetchUserUseCase};
use crate::auth::application::use_cases::list_users::{IListUsersUseCase, ListUsersError};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{
    ILogoutUseCase, LogoutError, LogoutRequest, LogoutResponse,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::auth::application::use_cases::signup_user::{
    ISignupUserUseCase, SignupError, SignupPayload, SignupUserResponse,
};
use crate::auth::application::use_cases::update_user::{
    IUpdateUserUseCase, UpdateUserError, UpdateUserPayload,
};
use crate::issue::application::ports::outgoing::{IssueFilter, IssuePatch};
use crate::issue::application::use_cases::cast_vote::{
    CastVoteError, CastVoteRequest, ICastVoteUseCase,
};
use crate::issue::application::use_cases::close_issue::{CloseIssueError, ICloseIssueUseCase};
use crate::issue::application::use_cases::create_issue::{
    CreateIssueCommand, CreateIssueError, ICreateIssueUseCase,
};
use crate::issue::application::use_cases::delete_issue::{DeleteIssueError, IDeleteIssueUseCase};
use crate::issue::application::use_cases::fetch_issue::{FetchIssueError, IFetchIssueUseCase};
use crate::issue::application::use_cases::list_issues::{IListIssuesUseCase, ListIssuesError};
use crate::issue::application::use_cases::patch_issue::{IPatchIssueUseCase, PatchIssueError};
use crate::issue::application::use_cases::vote_summary::{
    IVoteSummaryUseCase, VoteSummary, VoteSummaryError,
};
use crate::issue::domain::entities::Issue;
use crate::issue_type::application::domain::entities::IssueType;
use crate::issue_type::application::ports::incoming::use_cases::{
    CreateIssueTypeCommand, CreateIssueTypeError, CreateIssueTypeUseCase, DeleteIssueTypeError,
    DeleteIssueTypeUseCase, GetIssueTypesError, GetIssueTypesUseCase,
};
use crate::notification::application::domain::entities::{Notification, NotificationEvent};
use crate::notification::application::ports::outgoing::citizen_notifier::{
    CitizenNotifier, NotifierError,
};
use crate::notification::application::use_cases::list_notifications::{
    IListNotificationsUseCase, ListNotificationsError,
};
use crate::notification::application::use_cases::mark_notification_read::{
    IMarkNotificationReadUseCase, MarkNotificationReadError,
};

// ────────────────────────────────────────────────────────────────
// Notification
// ────────────────────────────────────────────────────────────────

pub struct StubCitizenNotifier;

#[async_trait]
impl CitizenNotifier for StubCitizenNotifier {
    async fn notify(&self, _event: NotificationEvent) -> Result<(), NotifierError> {
        Ok(())
    }
}

pub struct StubListNotificationsUseCase;

#[async_trait]
impl IListNotificationsUseCase for StubListNotificationsUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<Notification>, ListNotificationsError> {
        Ok(vec![])
    }
}

pub struct StubMarkNotificationReadUseCase;

#[async_trait]
impl IMarkNotificationReadUseCase for StubMarkNotificationReadUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _notification_id: Uuid,
    ) -> Result<(), MarkNotificationReadError> {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────
// Auth
// ────────────────────────────────────────────────────────────────

pub struct StubSignupUserUseCase;

#[async_trait]
impl ISignupUserUseCase for StubSignupUserUseCase {
    async fn execute(&self, _payload: SignupPayload) -> Result<SignupUserResponse, SignupError> {
        Err(SignupError::RepositoryError("not used in this test".into()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        Err(RefreshTokenError::TokenInvalid)
    }
}

pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}

pub struct StubChangePasswordUseCase;

#[async_trait]
impl IChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _payload: ChangePasswordPayload,
    ) -> Result<(), ChangePasswordError> {
        Ok(())
    }
}

pub struct StubFetchUserUseCase;

#[async_trait]
impl IFetchUserUseCase for StubFetchUserUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_role: UserRole,
        _target_user_id: Uuid,
    ) -> Result<User, FetchUserError> {
        Err(FetchUserError::UserNotFound)
    }
}

pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_role: UserRole,
        _target_user_id: Uuid,
        _payload: UpdateUserPayload,
    ) -> Result<User, UpdateUserError> {
        Err(UpdateUserError::UserNotFound)
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_role: UserRole,
    ) -> Result<Vec<User>, ListUsersError> {
        Ok(vec![])
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_role: UserRole,
        _target_user_id: Uuid,
    ) -> Result<(), DeleteUserError> {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────
// Issues & votes
// ────────────────────────────────────────────────────────────────

pub struct StubCreateIssueUseCase;

#[async_trait]
impl ICreateIssueUseCase for StubCreateIssueUseCase {
    async fn execute(&self, _command: CreateIssueCommand) -> Result<Issue, CreateIssueError> {
        Err(CreateIssueError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

pub struct StubFetchIssueUseCase;

#[async_trait]
impl IFetchIssueUseCase for StubFetchIssueUseCase {
    async fn execute(&self, _issue_id: Uuid) -> Result<Issue, FetchIssueError> {
        Err(FetchIssueError::IssueNotFound)
    }
}

pub struct StubListIssuesUseCase;

#[async_trait]
impl IListIssuesUseCase for StubListIssuesUseCase {
    async fn execute(&self, _filter: IssueFilter) -> Result<Vec<Issue>, ListIssuesError> {
        Ok(vec![])
    }
}

pub struct StubPatchIssueUseCase;

#[async_trait]
impl IPatchIssueUseCase for StubPatchIssueUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_role: UserRole,
        _issue_id: Uuid,
        _patch: IssuePatch,
    ) -> Result<Issue, PatchIssueError> {
        Err(PatchIssueError::IssueNotFound)
    }
}

pub struct StubCloseIssueUseCase;

#[async_trait]
impl ICloseIssueUseCase for StubCloseIssueUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_role: UserRole,
        _issue_id: Uuid,
    ) -> Result<Issue, CloseIssueError> {
        Err(CloseIssueError::IssueNotFound)
    }
}

pub struct StubDeleteIssueUseCase;

#[async_trait]
impl IDeleteIssueUseCase for StubDeleteIssueUseCase {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_role: UserRole,
        _issue_id: Uuid,
    ) -> Result<(), DeleteIssueError> {
        Ok(())
    }
}

pub struct StubCastVoteUseCase;

#[async_trait]
impl ICastVoteUseCase for StubCastVoteUseCase {
    async fn execute(
        &self,
        _issue_id: Uuid,
        _user_id: Uuid,
        _request: CastVoteRequest,
    ) -> Result<VoteSummary, CastVoteError> {
        Err(CastVoteError::IssueNotFound)
    }
}

pub struct StubVoteSummaryUseCase;

#[async_trait]
impl IVoteSummaryUseCase for StubVoteSummaryUseCase {
    async fn execute(
        &self,
        _issue_id: Uuid,
        _requesting_user: Option<Uuid>,
    ) -> Result<VoteSummary, VoteSummaryError> {
        Err(VoteSummaryError::IssueNotFound)
    }
}

// ────────────────────────────────────────────────────────────────
// Issue types
// ────────────────────────────────────────────────────────────────

pub struct StubCreateIssueTypeUseCase;

#[async_trait]
impl CreateIssueTypeUseCase for StubCreateIssueTypeUseCase {
    async fn execute(
        &self,
        _command: CreateIssueTypeCommand,
    ) -> Result<IssueType, CreateIssueTypeError> {
        Err(CreateIssueTypeError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

pub struct StubGetIssueTypesUseCase;

#[async_trait]
impl GetIssueTypesUseCase for StubGetIssueTypesUseCase {
    async fn execute(&self) -> Result<Vec<IssueType>, GetIssueTypesError> {
        Ok(vec![])
    }
}

pub struct StubDeleteIssueTypeUseCase;

#[async_trait]
impl DeleteIssueTypeUseCase for StubDeleteIssueTypeUseCase {
    async fn execute(&self, _issue_type_id: Uuid) -> Result<(), DeleteIssueTypeError> {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────
// Attachments
// ────────────────────────────────────────────────────────────────

pub struct StubInitUploadUseCase;

#[async_trait]
impl IInitUploadUseCase for StubInitUploadUseCase {
    async fn execute(
        &self,
        _issue_id: Uuid,
        _content_type: String,
    ) -> Result<InitUploadResponse, InitUploadError> {
        Err(InitUploadError::IssueNotFound)
    }
}

pub struct StubListAttachmentsUseCase;

#[async_trait]
impl IListAttachmentsUseCase for StubListAttachmentsUseCase {
    async fn execute(
        &self,
        _issue_id: Uuid,
    ) -> Result<Vec<AttachmentWithUrl>, ListAttachmentsError> {
        Ok(vec![])
    }
}
