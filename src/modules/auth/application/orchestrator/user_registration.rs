use std::sync::Arc;

use tracing::warn;

use crate::auth::application::use_cases::signup_user::{
    ISignupUserUseCase, SignupError, SignupPayload, SignupUserResponse,
};
use crate::notification::application::domain::entities::NotificationEvent;
use crate::notification::application::ports::outgoing::citizen_notifier::CitizenNotifier;

/// Signup plus the welcome notification.
///
/// The notification is strictly best-effort: an account exists the
/// moment the signup use case returns, and a broken notification store
/// must not undo that.
pub struct UserRegistrationOrchestrator {
    signup_use_case: Arc<dyn ISignupUserUseCase>,
    notifier: Arc<dyn CitizenNotifier>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        signup_use_case: Arc<dyn ISignupUserUseCase>,
        notifier: Arc<dyn CitizenNotifier>,
    ) -> Self {
        Self {
            signup_use_case,
            notifier,
        }
    }

    pub async fn register(&self, payload: SignupPayload) -> Result<SignupUserResponse, SignupError> {
        let response = self.signup_use_case.execute(payload).await?;

        let event = NotificationEvent::Welcome {
            user_id: response.user.id,
            username: response.user.username.clone(),
        };

        if let Err(e) = self.notifier.notify(event).await {
            warn!(user_id = %response.user.id, "Welcome notification failed: {}", e);
        }

        Ok(response)
    }
}
