//! HTTP implementation of the provider boundaries
//!
//! Talks to the hosted identity/store endpoint configured in
//! [`ProviderConfig`]. A session token is issued at sign-in (and at account
//! creation, which also signs the user in) and sent as a bearer credential
//! on store calls; every transition is published through the crate's
//! session signal.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::{
    config::ProviderConfig,
    error::{AppError, AppResult},
    models::{Session, User},
    session::{SessionNotifier, SessionState},
};

use super::{Document, DocumentId, DocumentStore, DocumentStream, IdentityProvider};

pub struct RestProvider {
    http: reqwest::Client,
    config: ProviderConfig,
    notifier: SessionNotifier,
    token: RwLock<Option<String>>,
}

/// Token and identity issued by the provider on sign-in or account creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionGrant {
    user_id: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    documents: Vec<DocumentPayload>,
}

#[derive(Debug, Deserialize)]
struct DocumentPayload {
    id: String,
    fields: Value,
}

#[derive(Debug, Deserialize)]
struct InsertResponse {
    id: String,
}

impl RestProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            notifier: SessionNotifier::new(),
            token: RwLock::new(None),
        }
    }

    fn project_url(&self, path: &str) -> String {
        format!(
            "{}/v1/projects/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.project_id,
            path,
        )
    }

    fn collection_url(&self, collection: &str) -> String {
        self.project_url(&format!("collections/{}/documents", collection))
    }

    /// Shared sign-in path: both account creation and authentication return
    /// a session grant, so both end with the user signed in.
    async fn grant_session(&self, path: &str, email: &str, password: &str) -> AppResult<User> {
        let response = self
            .http
            .post(self.project_url(path))
            .query(&[("key", &self.config.api_key)])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Auth(format!(
                "provider rejected {}: {}",
                path,
                response.status()
            )));
        }

        let grant: SessionGrant = response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("malformed session grant: {}", e)))?;

        *self.token.write().await = Some(grant.token);
        self.notifier.emit(Session::Authenticated { user_id: grant.user_id.clone() });
        tracing::info!(user_id = %grant.user_id, "session established");

        Ok(User { id: grant.user_id, email: email.to_string() })
    }
}

#[async_trait]
impl IdentityProvider for RestProvider {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<User> {
        self.grant_session("accounts", email, password).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        self.grant_session("sessions", email, password).await
    }

    async fn end_session(&self) -> AppResult<()> {
        let token = self.token.write().await.take();
        if let Some(token) = token {
            // Best effort: the local session ends regardless
            let revoke = self
                .http
                .delete(self.project_url("sessions/current"))
                .query(&[("key", &self.config.api_key)])
                .bearer_auth(&token)
                .send()
                .await;
            if let Err(err) = revoke {
                tracing::warn!(error = %err, "failed to revoke remote session");
            }
        }
        self.notifier.emit(Session::Anonymous);
        tracing::info!("user signed out");
        Ok(())
    }

    fn session(&self) -> SessionState {
        self.notifier.state()
    }
}

#[async_trait]
impl DocumentStore for RestProvider {
    async fn query(&self, collection: &str) -> AppResult<DocumentStream> {
        let mut request = self
            .http
            .get(self.collection_url(collection))
            .query(&[("key", &self.config.api_key)]);
        if let Some(token) = self.token.read().await.as_ref() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(AppError::Fetch(format!(
                "query of {} returned {}",
                collection,
                response.status()
            )));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(format!("malformed query response: {}", e)))?;
        let documents: Vec<Document> = body
            .documents
            .into_iter()
            .map(|doc| Document { id: doc.id, fields: doc.fields })
            .collect();
        Ok(Box::pin(tokio_stream::iter(documents)))
    }

    async fn insert(&self, collection: &str, fields: Value) -> AppResult<DocumentId> {
        let mut request = self
            .http
            .post(self.collection_url(collection))
            .query(&[("key", &self.config.api_key)])
            .json(&fields);
        if let Some(token) = self.token.read().await.as_ref() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Submit(e.to_string()))?;
        if !response.status().is_success() {
            return Err(AppError::Submit(format!(
                "insert into {} returned {}",
                collection,
                response.status()
            )));
        }

        let body: InsertResponse = response
            .json()
            .await
            .map_err(|e| AppError::Submit(format!("malformed insert response: {}", e)))?;
        Ok(body.id)
    }
}
