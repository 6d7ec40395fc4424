// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ephemeral kubeconfig files built from control plane credentials

use crate::constants::{artifact, KUBE_CONTEXT_NAME};
use crate::error::{OktetoError, Result};
use crate::types::Credential;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// The kubeconfig subset needed to reach a single cluster with a bearer token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct KubeconfigDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub clusters: Vec<NamedCluster>,
    #[serde(default)]
    pub users: Vec<NamedUser>,
    #[serde(default)]
    pub contexts: Vec<NamedContext>,
    #[serde(rename = "current-context", default)]
    pub current_context: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedCluster {
    pub name: String,
    pub cluster: ClusterEntry,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterEntry {
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub certificate_authority_data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedUser {
    pub name: String,
    pub user: UserEntry,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserEntry {
    #[serde(default)]
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedContext {
    pub name: String,
    pub context: ContextEntry,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ContextEntry {
    pub cluster: String,
    pub user: String,
    #[serde(default)]
    pub namespace: String,
}

impl KubeconfigDocument {
    /// Build a kubeconfig with one cluster, one user and one context named `okteto`.
    ///
    /// The certificate is already base64 encoded by the control plane and is written verbatim.
    pub fn from_credential(credential: &Credential, namespace: &str, user_id: &str) -> Self {
        Self {
            api_version: "v1".to_string(),
            kind: "Config".to_string(),
            clusters: vec![NamedCluster {
                name: KUBE_CONTEXT_NAME.to_string(),
                cluster: ClusterEntry {
                    server: credential.server.clone(),
                    certificate_authority_data: credential.certificate.clone(),
                },
            }],
            users: vec![NamedUser {
                name: user_id.to_string(),
                user: UserEntry {
                    token: credential.token.clone(),
                },
            }],
            contexts: vec![NamedContext {
                name: KUBE_CONTEXT_NAME.to_string(),
                context: ContextEntry {
                    cluster: KUBE_CONTEXT_NAME.to_string(),
                    user: user_id.to_string(),
                    namespace: namespace.to_string(),
                },
            }],
            current_context: KUBE_CONTEXT_NAME.to_string(),
        }
    }

    pub fn current_context(&self) -> Option<&ContextEntry> {
        self.contexts
            .iter()
            .find(|c| c.name == self.current_context)
            .map(|c| &c.context)
    }

    pub fn cluster(&self, name: &str) -> Option<&ClusterEntry> {
        self.clusters
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.cluster)
    }

    pub fn user(&self, name: &str) -> Option<&UserEntry> {
        self.users.iter().find(|u| u.name == name).map(|u| &u.user)
    }
}

/// A kubeconfig written to a uniquely named temporary file.
///
/// The file is removed by [`EphemeralKubeconfig::release`] or, failing that, when the value is dropped.
#[derive(Debug)]
pub struct EphemeralKubeconfig {
    file: NamedTempFile,
}

impl EphemeralKubeconfig {
    /// Write a kubeconfig for `credential` targeting `namespace`.
    /// Uses `dir` when given, the system temp dir otherwise.
    pub fn materialize(
        credential: &Credential,
        namespace: &str,
        user_id: &str,
        dir: Option<&Path>,
    ) -> Result<Self> {
        let document = KubeconfigDocument::from_credential(credential, namespace, user_id);
        let yaml = serde_yaml::to_string(&document).map_err(|e| {
            OktetoError::ArtifactWriteFailed(format!("Failed to encode kubeconfig: {}", e))
        })?;

        let mut builder = tempfile::Builder::new();
        builder.prefix(artifact::PREFIX).suffix(artifact::SUFFIX);
        let created = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut file = created.map_err(|e| {
            OktetoError::ArtifactWriteFailed(format!("Failed to create temporary file: {}", e))
        })?;

        // On error `file` is dropped here, which removes the partial file
        file.write_all(yaml.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| {
                OktetoError::ArtifactWriteFailed(format!(
                    "Failed to write {}: {}",
                    file.path().display(),
                    e
                ))
            })?;

        debug!("Wrote kubeconfig for namespace {} to {}", namespace, file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the file now. Failures are logged, the file is gone or unreachable either way.
    pub fn release(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => debug!("Removed kubeconfig {}", path.display()),
            Err(e) => warn!("Failed to remove kubeconfig {}: {}", path.display(), e),
        }
    }
}
