// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{api, env as vars, DEFAULT_USER_ID, KUBECONFIG_ENV};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration loaded from environment variables and the Okteto token file
#[derive(Debug, Clone)]
pub struct Config {
    /// Control plane URL
    pub url: Url,
    pub token: String,
    /// Identity label written as the kubeconfig user
    pub user_id: String,
    /// Space namespace to request credentials for, empty for the user's default
    pub namespace: String,
    /// Variable that receives the ephemeral kubeconfig path
    pub kubeconfig_env: String,
    pub bind_kubeconfig: bool,
    /// Directory for ephemeral kubeconfigs, the system temp dir when unset
    pub temp_dir: Option<PathBuf>,
    /// Deadline for control plane calls
    pub timeout: Option<Duration>,
}

/// The subset of `~/.okteto/.token.json` we care about
#[derive(Deserialize, Debug, Default)]
pub struct TokenFile {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Token", default)]
    pub token: String,
    #[serde(rename = "URL", default)]
    pub url: String,
}

impl TokenFile {
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read token file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse token file {}", path.display()))
    }

    fn default_path() -> Option<PathBuf> {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".okteto").join(".token.json"))
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        // The token file is optional as long as the environment provides a token
        let token_path = var(vars::TOKEN_FILE)
            .map(PathBuf::from)
            .or_else(TokenFile::default_path);
        let token_file = match token_path {
            Some(path) if path.exists() => {
                debug!("Reading Okteto token file {}", path.display());
                TokenFile::read(&path)?
            }
            _ => TokenFile::default(),
        };

        let token = var(vars::TOKEN)
            .or_else(|| Some(token_file.token.clone()).filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                anyhow!(
                    "{} environment variable not set and no token file found, run 'okteto login'",
                    vars::TOKEN
                )
            })?;

        let raw_url = var(vars::URL)
            .or_else(|| Some(token_file.url.clone()).filter(|u| !u.is_empty()))
            .unwrap_or_else(|| api::DEFAULT_URL.to_string());
        let url = Url::parse(&raw_url)
            .with_context(|| format!("Invalid control plane URL '{}'", raw_url))?;

        let user_id = var(vars::USER_ID)
            .or_else(|| Some(token_file.id.clone()).filter(|id| !id.is_empty()))
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        let bind_kubeconfig = match var(vars::BIND_KUBECONFIG) {
            Some(v) => v
                .parse()
                .with_context(|| format!("{} must be true or false", vars::BIND_KUBECONFIG))?,
            None => true,
        };

        let timeout = var(vars::TIMEOUT_SECS)
            .map(|v| {
                v.parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| format!("{} must be a number of seconds", vars::TIMEOUT_SECS))
            })
            .transpose()?;

        Ok(Config {
            url,
            token,
            user_id,
            namespace: lookup(vars::NAMESPACE).unwrap_or_default(),
            kubeconfig_env: var(vars::KUBECONFIG_ENV).unwrap_or_else(|| KUBECONFIG_ENV.to_string()),
            bind_kubeconfig,
            temp_dir: var(vars::TEMP_DIR).map(PathBuf::from),
            timeout,
        })
    }
}
