use std::time::Duration;

use derive_more::Display;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    constants::SKILLS_PATH,
    entities::skill::{SkillId, SkillPayload},
    errors::AppError,
    settings::AppConfig,
};

/// The five calls the client can make against the store.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    #[display("list")]
    List,
    #[display("get_by_id")]
    GetById,
    #[display("create")]
    Create,
    #[display("update")]
    Update,
    #[display("delete")]
    Delete,
}

impl Operation {
    pub fn method(self) -> Method {
        match self {
            Operation::List | Operation::GetById => Method::GET,
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        }
    }

    /// Whether the call addresses `/skills/{id}` rather than the collection.
    pub fn targets_single_resource(self) -> bool {
        matches!(self, Operation::GetById | Operation::Update | Operation::Delete)
    }

    pub fn carries_payload(self) -> bool {
        matches!(self, Operation::Create | Operation::Update)
    }
}

/// REST-backed skill repository. Holds no mutable state; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpSkillRepo {
    pub client: Client,
    root: Url,
}

impl HttpSkillRepo {
    pub fn new(base_url: &Url, request_timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::InvalidInput(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &Url) -> Result<Self, AppError> {
        Ok(HttpSkillRepo {
            client,
            root: normalize_base_url(base_url)?,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let timeout = config
            .request_timeout()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        Self::new(&config.api_base_url, timeout)
    }

    /// Base URL with a trailing slash, as used for joining.
    pub fn base_url(&self) -> &Url {
        &self.root
    }

    pub fn collection_url(&self) -> Result<Url, AppError> {
        self.join(SKILLS_PATH)
    }

    pub fn resource_url(&self, id: SkillId) -> Result<Url, AppError> {
        self.join(&format!("{}/{}", SKILLS_PATH, id))
    }

    fn join(&self, path: &str) -> Result<Url, AppError> {
        self.root
            .join(path)
            .map_err(|e| AppError::InvalidInput(format!("Invalid skill URL '{}': {}", path, e)))
    }

    /// Issues exactly one request. Non-success statuses become errors with
    /// the body text attached.
    #[instrument(name = "skill_request", skip(self, body), fields(method = %operation.method()))]
    pub(crate) async fn send(
        &self,
        operation: Operation,
        url: Url,
        body: Option<&SkillPayload>,
    ) -> Result<Response, AppError> {
        let mut request = self.client.request(operation.method(), url.clone());
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%operation, %url, error = %e, "Store unreachable");
            AppError::from(e)
        })?;

        let status = response.status();
        debug!(%operation, status = status.as_u16(), "Store responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%operation, status = status.as_u16(), %body, "Store rejected request");

        Err(AppError::from_status(operation, status.as_u16(), body))
    }

    /// Reads the whole body and decodes it; nothing is returned on a partial decode.
    pub(crate) async fn decode<T: DeserializeOwned>(
        operation: Operation,
        response: Response,
    ) -> Result<T, AppError> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%operation, status, error = %e, "Undecodable store response");
            AppError::InvalidResponse {
                status,
                message: e.to_string(),
            }
        })
    }
}

fn normalize_base_url(base_url: &Url) -> Result<Url, AppError> {
    if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
        return Err(AppError::InvalidInput(format!(
            "Base URL must be an http(s) URL, got '{}'",
            base_url
        )));
    }

    let mut root = base_url.clone();
    root.set_query(None);
    root.set_fragment(None);
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }

    Ok(root)
}
