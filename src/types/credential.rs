// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::INTERNAL_NAMESPACE_SUFFIX;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kubernetes credentials issued by the control plane for a space.
///
/// Fields the server leaves out or sends as `null` decode as empty strings; see [`Credential::missing_fields`].
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Credential {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub server: String,
    /// Base64 encoded PEM bundle of the cluster CA
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certificate: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub namespace: String,
}

impl Credential {
    /// Names of the fields that came back empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("server", &self.server),
            ("certificate", &self.certificate),
            ("token", &self.token),
            ("namespace", &self.namespace),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Name of the internal namespace that belongs to this credential's space
    pub fn internal_namespace(&self) -> String {
        internal_namespace(&self.namespace)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Keep the token out of logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("server", &self.server)
            .field("certificate", &format_args!("<{} bytes>", self.certificate.len()))
            .field("token", &format_args!("<redacted>"))
            .field("namespace", &self.namespace)
            .finish()
    }
}

/// Derive the internal namespace name for a space namespace.
///
/// An empty namespace yields `-okteto`; empty spaces are resolved by the control plane before this point.
pub fn internal_namespace(namespace: &str) -> String {
    format!("{}{}", namespace, INTERNAL_NAMESPACE_SUFFIX)
}

/// Body of the `credentials` query
#[derive(Deserialize, Debug)]
pub(crate) struct CredentialsData {
    pub credentials: Option<Credential>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_credential(namespace: &str) -> Credential {
        Credential {
            server: "https://1.2.3.4:6443".to_string(),
            certificate: "Y2VydA==".to_string(),
            token: "secret-token".to_string(),
            namespace: namespace.to_string(),
        }
    }

    #[test]
    fn test_internal_namespace_appends_suffix() {
        assert_eq!(internal_namespace("team-a"), "team-a-okteto");
    }

    #[test]
    fn test_internal_namespace_empty() {
        assert_eq!(internal_namespace(""), "-okteto");
    }

    #[test]
    fn test_internal_namespace_is_plain_concatenation() {
        for ns in ["a", "cindy", "my-space-okteto", "UPPER", "with.dot"] {
            assert_eq!(internal_namespace(ns), format!("{}-okteto", ns));
        }
    }

    #[test]
    fn test_credential_internal_namespace() {
        assert_eq!(
            make_credential("team-a").internal_namespace(),
            "team-a-okteto"
        );
    }

    #[test]
    fn test_complete_credential() {
        let cred = make_credential("team-a");
        assert!(cred.is_complete());
        assert!(cred.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let cred = Credential {
            token: String::new(),
            namespace: String::new(),
            ..make_credential("team-a")
        };
        assert!(!cred.is_complete());
        assert_eq!(cred.missing_fields(), vec!["token", "namespace"]);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let cred: Credential =
            serde_json::from_str(r#"{"server": "https://k8s", "namespace": "team-a"}"#).unwrap();
        assert_eq!(cred.server, "https://k8s");
        assert_eq!(cred.token, "");
        assert_eq!(cred.missing_fields(), vec!["certificate", "token"]);
    }

    #[test]
    fn test_deserialize_null_fields() {
        let cred: Credential = serde_json::from_str(
            r#"{"server": null, "certificate": "Y2VydA==", "token": null, "namespace": "team-a"}"#,
        )
        .unwrap();
        assert_eq!(cred.server, "");
        assert_eq!(cred.token, "");
        assert_eq!(cred.namespace, "team-a");
        assert_eq!(cred.missing_fields(), vec!["server", "token"]);
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", make_credential("team-a"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("team-a"));
    }

    #[test]
    fn test_credentials_data_null() {
        let data: CredentialsData = serde_json::from_str(r#"{"credentials": null}"#).unwrap();
        assert!(data.credentials.is_none());
    }
}
