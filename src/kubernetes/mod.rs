// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig materialization, environment binding and client creation.

pub mod client;
pub mod env;
pub mod kubeconfig;

pub use client::{build_client_from_env, build_scoped_client};
pub use env::bind_kubeconfig_path;
pub use kubeconfig::{EphemeralKubeconfig, KubeconfigDocument};
