// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Data exchanged with the Okteto control plane.

pub mod credential;

pub use credential::{internal_namespace, Credential};
