// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation from kubeconfig files

use crate::error::{OktetoError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use secrecy::ExposeSecret;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Create a client and its resolved configuration from an ephemeral kubeconfig at `path`.
///
/// The current context must authenticate with a non-empty bearer token, otherwise the client
/// would talk to the cluster anonymously.
#[instrument]
pub async fn build_scoped_client(path: &Path) -> Result<(Client, KConfig)> {
    let client_config = load_config(path).await?;
    check_bearer_token(&client_config)?;
    create_client(client_config)
}

/// Create a client from the kubeconfig referenced by the environment variable `var`.
///
/// Unlike [`build_scoped_client`] any authentication method the kubeconfig declares is accepted.
pub async fn build_client_from_env(var: &str) -> Result<(Client, KConfig)> {
    let path = std::env::var_os(var)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            OktetoError::ClientConstructionFailed(format!("{} environment variable not set", var))
        })?;

    let client_config = load_config(&path).await?;
    create_client(client_config)
}

/// Parse the kubeconfig at `path` and resolve its current context
async fn load_config(path: &Path) -> Result<KConfig> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        OktetoError::ClientConstructionFailed(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| OktetoError::ClientConstructionFailed(format!("Failed to create config: {}", e)))
}

fn create_client(client_config: KConfig) -> Result<(Client, KConfig)> {
    let client = Client::try_from(client_config.clone()).map_err(|e| {
        OktetoError::ClientConstructionFailed(format!("Failed to create client: {}", e))
    })?;

    info!(
        "Created client for {} in namespace {}",
        client_config.cluster_url, client_config.default_namespace
    );
    Ok((client, client_config))
}

fn check_bearer_token(client_config: &KConfig) -> Result<()> {
    match &client_config.auth_info.token {
        Some(token) if !token.expose_secret().is_empty() => {
            debug!("Kubeconfig authenticates with a bearer token");
            Ok(())
        }
        _ => Err(OktetoError::ClientConstructionFailed(format!(
            "Kubeconfig for {} has no bearer token",
            client_config.cluster_url
        ))),
    }
}
