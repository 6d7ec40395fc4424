// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Clients bound to the internal namespace of an Okteto space.

use crate::config::Config;
use crate::context::Context;
use crate::error::Result;
use crate::kubernetes::{bind_kubeconfig_path, build_scoped_client, EphemeralKubeconfig};
use crate::okteto::ControlPlaneClient;
use kube::{Client, Config as KConfig};
use std::fmt;
use tracing::{info, instrument};

/// A Kubernetes client scoped to an internal namespace
#[derive(Clone)]
pub struct ScopedClient {
    pub client: Client,
    /// Connection configuration the client was built from
    pub config: KConfig,
    /// Namespace the client is scoped to
    pub namespace: String,
}

impl fmt::Debug for ScopedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedClient")
            .field("cluster_url", &self.config.cluster_url)
            .field("namespace", &self.namespace)
            .finish()
    }
}

/// Get a client for the internal namespace of the user's default space
pub async fn get_internal_namespace_client(
    ctx: &Context,
    control_plane: &ControlPlaneClient,
    config: &Config,
) -> Result<ScopedClient> {
    get_scoped_namespace_client(ctx, control_plane, config, "").await
}

/// Get a client for the internal namespace of `namespace` (empty for the default space).
///
/// Fetches credentials, writes them to a temporary kubeconfig, optionally exports its path
/// through `config.kubeconfig_env`, and builds the client from that file. The file is
/// removed before returning, whatever the outcome.
#[instrument(skip(ctx, control_plane, config))]
pub async fn get_scoped_namespace_client(
    ctx: &Context,
    control_plane: &ControlPlaneClient,
    config: &Config,
    namespace: &str,
) -> Result<ScopedClient> {
    let credential = control_plane.get_credentials(ctx, namespace).await?;
    let internal_namespace = credential.internal_namespace();

    let kubeconfig = EphemeralKubeconfig::materialize(
        &credential,
        &internal_namespace,
        &config.user_id,
        config.temp_dir.as_deref(),
    )?;

    let result = bind_and_build(&kubeconfig, config).await;
    kubeconfig.release();
    let (client, client_config) = result?;

    info!("Client ready for namespace {}", internal_namespace);
    Ok(ScopedClient {
        client,
        config: client_config,
        namespace: internal_namespace,
    })
}

async fn bind_and_build(kubeconfig: &EphemeralKubeconfig, config: &Config) -> Result<(Client, KConfig)> {
    if config.bind_kubeconfig {
        bind_kubeconfig_path(&config.kubeconfig_env, kubeconfig.path())?;
    }
    // Build from the explicit path; the variable may have been rebound by a concurrent call
    build_scoped_client(kubeconfig.path()).await
}
