// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Suffix appended to a space namespace to name its internal namespace
pub const INTERNAL_NAMESPACE_SUFFIX: &str = "-okteto";

/// Cluster and context name written into ephemeral kubeconfigs
pub const KUBE_CONTEXT_NAME: &str = "okteto";

/// Environment variable that points kubectl-compatible tooling at a kubeconfig
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Identity label used when no user id is known
pub const DEFAULT_USER_ID: &str = "okteto";

/// Control plane API
pub mod api {
    /// Public Okteto control plane
    pub const DEFAULT_URL: &str = "https://cloud.okteto.com";
    /// Path of the GraphQL endpoint, relative to the control plane URL
    pub const GRAPHQL_PATH: &str = "/graphql";
}

/// Ephemeral kubeconfig file naming
pub mod artifact {
    pub const PREFIX: &str = "okteto";
    pub const SUFFIX: &str = ".yaml";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const URL: &str = "OKTETO_URL";
    pub const TOKEN: &str = "OKTETO_TOKEN";
    pub const USER_ID: &str = "OKTETO_USER_ID";
    pub const TOKEN_FILE: &str = "OKTETO_TOKEN_FILE";
    pub const NAMESPACE: &str = "OKTETO_NAMESPACE";
    pub const KUBECONFIG_ENV: &str = "OKTETO_KUBECONFIG_ENV";
    pub const BIND_KUBECONFIG: &str = "OKTETO_BIND_KUBECONFIG";
    pub const TEMP_DIR: &str = "OKTETO_TEMP_DIR";
    pub const TIMEOUT_SECS: &str = "OKTETO_TIMEOUT_SECS";
}
