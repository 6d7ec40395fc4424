// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context as _, Result};
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, ResourceExt};
use tracing::{info, warn};

use okteto_scope::config::Config;
use okteto_scope::context::Context;
use okteto_scope::okteto::{get_scoped_namespace_client, ControlPlaneClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: url={}, namespace='{}'",
        config.url, config.namespace
    );

    let control_plane = ControlPlaneClient::new(&config)?;

    let (mut ctx, cancel) = Context::with_cancel();
    if let Some(timeout) = config.timeout {
        ctx = ctx.with_timeout(timeout);
    }
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            cancel.cancel();
        }
    });

    let scoped = get_scoped_namespace_client(&ctx, &control_plane, &config, &config.namespace)
        .await
        .context("Failed to get a client for the internal namespace")?;
    info!(
        "Connected to {} as namespace {}",
        scoped.config.cluster_url, scoped.namespace
    );

    // Smoke check: the scoped credentials can read the internal namespace
    let pods: Api<Pod> = Api::namespaced(scoped.client.clone(), &scoped.namespace);
    let list = pods
        .list(&ListParams::default())
        .await
        .with_context(|| format!("Failed to list pods in {}", scoped.namespace))?;

    info!("Found {} pods in {}", list.items.len(), scoped.namespace);
    for pod in &list.items {
        let phase = pod
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        info!("  {} ({})", pod.name_any(), phase);
    }

    Ok(())
}
