// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Space credential lookup

use crate::context::Context;
use crate::error::{OktetoError, Result};
use crate::okteto::client::{ControlPlaneClient, GraphqlRequest};
use crate::types::credential::{Credential, CredentialsData};
use serde_json::json;
use tracing::{info, instrument, warn};

const CREDENTIALS_QUERY: &str = r#"query Credentials($space: String!) {
  credentials(space: $space) {
    server, certificate, token, namespace
  }
}"#;

impl ControlPlaneClient {
    /// Get the Kubernetes credentials of a space. An empty namespace selects the user's default space.
    #[instrument(skip(self, ctx))]
    pub async fn get_credentials(&self, ctx: &Context, namespace: &str) -> Result<Credential> {
        let request = GraphqlRequest {
            query: CREDENTIALS_QUERY,
            variables: json!({ "space": namespace }),
        };

        let data: CredentialsData = self.query(ctx, &request).await?;
        let Some(credential) = data.credentials else {
            return Err(OktetoError::RemoteQueryFailed(format!(
                "Control plane returned no credentials for space '{}'",
                namespace
            )));
        };

        let missing = credential.missing_fields();
        if missing.is_empty() {
            info!(
                "Got credentials for namespace {} on {}",
                credential.namespace, credential.server
            );
        } else {
            warn!(
                "Credentials for space '{}' are missing fields: {}",
                namespace,
                missing.join(", ")
            );
        }

        Ok(credential)
    }
}
