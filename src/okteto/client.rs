// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GraphQL transport to the Okteto control plane.
//!
//! Requests go through a `kube::Client` pointed at the control plane URL, which gives us
//! the same TLS stack and tower plumbing as the cluster clients (and the same mocks in tests).

use crate::config::Config;
use crate::constants::api::GRAPHQL_PATH;
use crate::context::Context;
use crate::error::{OktetoError, Result};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request, StatusCode};
use kube::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const NOT_AUTHORIZED: &str = "not-authorized";

#[derive(Serialize, Debug)]
pub(crate) struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Deserialize, Debug)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize, Debug)]
struct GraphqlError {
    message: String,
}

/// Client for the Okteto control plane API
#[derive(Clone)]
pub struct ControlPlaneClient {
    client: Client,
    token: String,
}

impl ControlPlaneClient {
    /// Create a client for the control plane configured in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let base = config.url.as_str().trim_end_matches('/');
        let uri: http::Uri = base.parse().map_err(|e| {
            OktetoError::InvalidConfig(format!("Invalid control plane URL {}: {}", base, e))
        })?;

        let client = Client::try_from(kube::Config::new(uri)).map_err(|e| {
            OktetoError::InvalidConfig(format!("Failed to create control plane client: {}", e))
        })?;

        Ok(Self::from_client(client, config.token.clone()))
    }

    /// Wrap an existing client whose base URL is the control plane
    pub fn from_client(client: Client, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    /// Run a GraphQL query and decode its `data` object
    #[instrument(skip(self, ctx, request))]
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: &GraphqlRequest<'_>,
    ) -> Result<T> {
        let body = serde_json::to_vec(request).map_err(|e| {
            OktetoError::RemoteQueryFailed(format!("Failed to encode query: {}", e))
        })?;

        let req = Request::builder()
            .method(Method::POST)
            .uri(GRAPHQL_PATH)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .map_err(|e| OktetoError::RemoteQueryFailed(format!("Failed to build request: {}", e)))?;

        let text = ctx
            .run(async {
                self.client
                    .request_text(req)
                    .await
                    .map_err(translate_transport_error)
            })
            .await?;

        debug!("Control plane answered with {} bytes", text.len());
        decode_response(&text)
    }
}

fn decode_response<T: DeserializeOwned>(text: &str) -> Result<T> {
    let response: GraphqlResponse<T> = serde_json::from_str(text).map_err(|e| {
        OktetoError::RemoteQueryFailed(format!("Failed to decode control plane response: {}", e))
    })?;

    if let Some(err) = response.errors.first() {
        return Err(translate_graphql_error(&err.message));
    }

    response.data.ok_or_else(|| {
        OktetoError::RemoteQueryFailed("Control plane response has no data".to_string())
    })
}

fn translate_graphql_error(message: &str) -> OktetoError {
    if message == NOT_AUTHORIZED {
        return not_logged_in();
    }
    OktetoError::RemoteQueryFailed(message.to_string())
}

fn translate_transport_error(err: kube::Error) -> OktetoError {
    match err {
        kube::Error::Api(resp) if resp.code == StatusCode::UNAUTHORIZED.as_u16() => not_logged_in(),
        kube::Error::Api(resp) => OktetoError::RemoteQueryFailed(format!(
            "Control plane returned {}: {}",
            resp.code, resp.message
        )),
        e => OktetoError::RemoteQueryFailed(e.to_string()),
    }
}

fn not_logged_in() -> OktetoError {
    OktetoError::RemoteQueryFailed(
        "your Okteto token is not valid, run 'okteto login' and try again".to_string(),
    )
}
