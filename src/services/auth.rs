//! Authentication actions: sign-up, sign-in, sign-out

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::User,
    provider::IdentityProvider,
    view::{AuthHandler, AuthSubmit, Notice, Presenter},
};

/// Sign-up credentials, validated before they reach the provider
#[derive(Debug, Validate)]
pub struct Credentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Drives account actions against the identity provider.
///
/// The session transition itself arrives through the provider's session
/// signal, not from here; this controller only reports action failures.
#[derive(Clone)]
pub struct AuthController {
    identity: Arc<dyn IdentityProvider>,
    presenter: Arc<dyn Presenter>,
}

impl AuthController {
    pub fn new(identity: Arc<dyn IdentityProvider>, presenter: Arc<dyn Presenter>) -> Self {
        Self { identity, presenter }
    }

    /// Create an account; the provider signs the new user in
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<User> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        credentials
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let user = self.identity.create_account(email, password).await?;
        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Authenticate with existing credentials; the provider is the single
    /// authority on what is valid
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self.identity.authenticate(email, password).await?;
        tracing::info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    pub async fn sign_out(&self) -> AppResult<()> {
        self.identity.end_session().await
    }

    /// Run one auth-form submission; failures are logged and surfaced as a
    /// notice, never retried
    pub async fn dispatch(&self, submit: AuthSubmit) {
        let result = match submit {
            AuthSubmit::SignUp { email, password } => {
                self.sign_up(&email, &password).await.map(|_| ())
            }
            AuthSubmit::SignIn { email, password } => {
                self.sign_in(&email, &password).await.map(|_| ())
            }
            AuthSubmit::SignOut => self.sign_out().await,
        };
        if let Err(err) = result {
            tracing::error!(error = %err, "auth action failed");
            self.presenter.notify(Notice::AuthFailed(err.to_string()));
        }
    }

    /// Register the auth-form handler with the presenter
    pub fn attach(&self) {
        let auth = self.clone();
        let handler: AuthHandler = Box::new(move |submit| {
            let auth = auth.clone();
            Box::pin(async move { auth.dispatch(submit).await })
        });
        self.presenter.on_auth_submit(handler);
    }
}
