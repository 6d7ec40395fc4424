// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Process environment binding for kubeconfig paths

use crate::error::{OktetoError, Result};
use std::path::Path;
use tracing::debug;

/// Point `var` at `path` for this process and its children.
///
/// The assignment is process-wide and is not reverted.
pub fn bind_kubeconfig_path(var: &str, path: &Path) -> Result<()> {
    if var.is_empty() || var.contains('=') || var.contains('\0') {
        return Err(OktetoError::EnvironmentBindFailed(format!(
            "invalid environment variable name {:?}",
            var
        )));
    }
    if path.as_os_str().is_empty() {
        return Err(OktetoError::EnvironmentBindFailed(format!(
            "couldn't set {}: empty path",
            var
        )));
    }
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(OktetoError::EnvironmentBindFailed(format!(
            "couldn't set {}: path contains a NUL byte",
            var
        )));
    }

    std::env::set_var(var, path);
    debug!("Set {} to {}", var, path.display());
    Ok(())
}
