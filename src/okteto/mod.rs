// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Okteto control plane access and scoped client provisioning.

pub mod client;
pub mod credentials;
pub mod scoped;

pub use client::ControlPlaneClient;
pub use scoped::{get_internal_namespace_client, get_scoped_namespace_client, ScopedClient};
