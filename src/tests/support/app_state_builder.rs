use std::sync::Arc;

use actix_web::web;

use crate::attachment::application::use_cases::init_upload::IInitUploadUseCase;
use crate::attachment::application::use_cases::list_attachments::IListAttachmentsUseCase;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, delete_user::IDeleteUserUseCase,
    fetch_user::IFetchUserUseCase, list_users::IListUsersUseCase, login_user::ILoginUserUseCase,
    logout_user::ILogoutUseCase, refresh_token::IRefreshTokenUseCase,
    update_user::IUpdateUserUseCase,
};
use crate::issue::application::use_cases::{
    cast_vote::ICastVoteUseCase, close_issue::ICloseIssueUseCase,
    create_issue::ICreateIssueUseCase, delete_issue::IDeleteIssueUseCase,
    fetch_issue::IFetchIssueUseCase, list_issues::IListIssuesUseCase,
    patch_issue::IPatchIssueUseCase, vote_summary::IVoteSummaryUseCase,
};
use crate::issue_type::application::ports::incoming::use_cases::{
    CreateIssueTypeUseCase, DeleteIssueTypeUseCase, GetIssueTypesUseCase,
};
use crate::issue_type::application::IssueTypeUseCases;
use crate::notification::application::use_cases::{
    list_notifications::IListNotificationsUseCase,
    mark_notification_read::IMarkNotificationReadUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where everything is a stub; tests swap in the
/// one use case they exercise.
pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    fetch_user: Arc<dyn IFetchUserUseCase + Send + Sync>,
    update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    create_issue: Arc<dyn ICreateIssueUseCase + Send + Sync>,
    fetch_issue: Arc<dyn IFetchIssueUseCase + Send + Sync>,
    list_issues: Arc<dyn IListIssuesUseCase + Send + Sync>,
    patch_issue: Arc<dyn IPatchIssueUseCase + Send + Sync>,
    close_issue: Arc<dyn ICloseIssueUseCase + Send + Sync>,
    delete_issue: Arc<dyn IDeleteIssueUseCase + Send + Sync>,
    cast_vote: Arc<dyn ICastVoteUseCase + Send + Sync>,
    vote_summary: Arc<dyn IVoteSummaryUseCase + Send + Sync>,
    create_issue_type: Arc<dyn CreateIssueTypeUseCase + Send + Sync>,
    get_issue_types: Arc<dyn GetIssueTypesUseCase + Send + Sync>,
    delete_issue_type: Arc<dyn DeleteIssueTypeUseCase + Send + Sync>,
    init_upload: Arc<dyn IInitUploadUseCase + Send + Sync>,
    list_attachments: Arc<dyn IListAttachmentsUseCase + Send + Sync>,
    list_notifications: Arc<dyn IListNotificationsUseCase + Send + Sync>,
    mark_notification_read: Arc<dyn IMarkNotificationReadUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(UserRegistrationOrchestrator::new(
                Arc::new(StubSignupUserUseCase),
                Arc::new(StubCitizenNotifier),
            )),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            change_password: Arc::new(StubChangePasswordUseCase),
            fetch_user: Arc::new(StubFetchUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            create_issue: Arc::new(StubCreateIssueUseCase),
            fetch_issue: Arc::new(StubFetchIssueUseCase),
            list_issues: Arc::new(StubListIssuesUseCase),
            patch_issue: Arc::new(StubPatchIssueUseCase),
            close_issue: Arc::new(StubCloseIssueUseCase),
            delete_issue: Arc::new(StubDeleteIssueUseCase),
            cast_vote: Arc::new(StubCastVoteUseCase),
            vote_summary: Arc::new(StubVoteSummaryUseCase),
            create_issue_type: Arc::new(StubCreateIssueTypeUseCase),
            get_issue_types: Arc::new(StubGetIssueTypesUseCase),
            delete_issue_type: Arc::new(StubDeleteIssueTypeUseCase),
            init_upload: Arc::new(StubInitUploadUseCase),
            list_attachments: Arc::new(StubListAttachmentsUseCase),
            list_notifications: Arc::new(StubListNotificationsUseCase),
            mark_notification_read: Arc::new(StubMarkNotificationReadUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, orchestrator: Arc<UserRegistrationOrchestrator>) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl IRefreshTokenUseCase + 'static) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_change_password(mut self, uc: impl IChangePasswordUseCase + 'static) -> Self {
        self.change_password = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl IFetchUserUseCase + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl IUpdateUserUseCase + 'static) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_create_issue(mut self, uc: impl ICreateIssueUseCase + 'static) -> Self {
        self.create_issue = Arc::new(uc);
        self
    }

    pub fn with_fetch_issue(mut self, uc: impl IFetchIssueUseCase + 'static) -> Self {
        self.fetch_issue = Arc::new(uc);
        self
    }

    pub fn with_list_issues(mut self, uc: impl IListIssuesUseCase + 'static) -> Self {
        self.list_issues = Arc::new(uc);
        self
    }

    pub fn with_patch_issue(mut self, uc: impl IPatchIssueUseCase + 'static) -> Self {
        self.patch_issue = Arc::new(uc);
        self
    }

    pub fn with_close_issue(mut self, uc: impl ICloseIssueUseCase + 'static) -> Self {
        self.close_issue = Arc::new(uc);
        self
    }

    pub fn with_delete_issue(mut self, uc: impl IDeleteIssueUseCase + 'static) -> Self {
        self.delete_issue = Arc::new(uc);
        self
    }

    pub fn with_cast_vote(mut self, uc: impl ICastVoteUseCase + 'static) -> Self {
        self.cast_vote = Arc::new(uc);
        self
    }

    pub fn with_vote_summary(mut self, uc: impl IVoteSummaryUseCase + 'static) -> Self {
        self.vote_summary = Arc::new(uc);
        self
    }

    pub fn with_create_issue_type(mut self, uc: impl CreateIssueTypeUseCase + 'static) -> Self {
        self.create_issue_type = Arc::new(uc);
        self
    }

    pub fn with_get_issue_types(mut self, uc: impl GetIssueTypesUseCase + 'static) -> Self {
        self.get_issue_types = Arc::new(uc);
        self
    }

    pub fn with_delete_issue_type(mut self, uc: impl DeleteIssueTypeUseCase + 'static) -> Self {
        self.delete_issue_type = Arc::new(uc);
        self
    }

    pub fn with_init_upload(mut self, uc: impl IInitUploadUseCase + 'static) -> Self {
        self.init_upload = Arc::new(uc);
        self
    }

    pub fn with_list_attachments(mut self, uc: impl IListAttachmentsUseCase + 'static) -> Self {
        self.list_attachments = Arc::new(uc);
        self
    }

    pub fn with_list_notifications(
        mut self,
        uc: impl IListNotificationsUseCase + 'static,
    ) -> Self {
        self.list_notifications = Arc::new(uc);
        self
    }

    pub fn with_mark_notification_read(
        mut self,
        uc: impl IMarkNotificationReadUseCase + 'static,
    ) -> Self {
        self.mark_notification_read = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            logout_user_use_case: self.logout_user,
            change_password_use_case: self.change_password,
            fetch_user_use_case: self.fetch_user,
            update_user_use_case: self.update_user,
            list_users_use_case: self.list_users,
            delete_user_use_case: self.delete_user,
            create_issue_use_case: self.create_issue,
            fetch_issue_use_case: self.fetch_issue,
            list_issues_use_case: self.list_issues,
            patch_issue_use_case: self.patch_issue,
            close_issue_use_case: self.close_issue,
            delete_issue_use_case: self.delete_issue,
            cast_vote_use_case: self.cast_vote,
            vote_summary_use_case: self.vote_summary,
            issue_type_use_cases: IssueTypeUseCases {
                create: self.create_issue_type,
                get_list: self.get_issue_types,
                delete: self.delete_issue_type,
            },
            init_upload_use_case: self.init_upload,
            list_attachments_use_case: self.list_attachments,
            list_notifications_use_case: self.list_notifications,
            mark_notification_read_use_case: self.mark_notification_read,
        })
    }
}
