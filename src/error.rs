// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OktetoError {
    #[error("Control plane query failed: {0}")]
    RemoteQueryFailed(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Operation deadline exceeded")]
    DeadlineExceeded,

    #[error("Failed to write kubeconfig: {0}")]
    ArtifactWriteFailed(String),

    #[error("Failed to bind kubeconfig to the environment: {0}")]
    EnvironmentBindFailed(String),

    #[error("Failed to build Kubernetes client: {0}")]
    ClientConstructionFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl OktetoError {
    /// True for errors caused by the caller's context rather than by a failing stage
    pub fn is_cancellation(&self) -> bool {
        matches!(self, OktetoError::Cancelled | OktetoError::DeadlineExceeded)
    }
}

pub type Result<T> = std::result::Result<T, OktetoError>;
