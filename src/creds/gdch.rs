//! Distributed-cloud service-account credentials.
//!
//! These keys belong to service identities on air-gapped/distributed cloud
//! appliances. Authentication is an RFC 8693 token exchange: a self-issued
//! JWT is posted to the appliance's token endpoint and swapped for an access
//! token that is only valid for the configured audience.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::signer::{AssertionClaims, Signer};
use super::{request_token, Token, TokenProvider};
use crate::errors::Result;
use crate::secrets::types::SecretString;

pub(crate) const ACCOUNT_TYPE: &str = "gdch_service_account";

const TOKEN_EXCHANGE_GRANT: &str = "urn:ietf:params:oauth:grant-type:token-exchange";
const ACCESS_TOKEN_TYPE: &str = "urn:ietf:params:oauth:token-type:access_token";
const SERVICE_ACCOUNT_TOKEN_TYPE: &str = "urn:k8s:params:oauth:token-type:serviceaccount";

/// Key material from a `gdch_service_account` credentials file.
#[derive(Debug, Clone, Deserialize)]
pub struct GdchServiceAccountKey {
    #[serde(rename = "type")]
    pub account_type: String,
    pub private_key_id: String,
    pub private_key: SecretString,
    pub project: String,
    #[serde(rename = "name")]
    pub service_identity_name: String,
    pub token_uri: String,
}

impl GdchServiceAccountKey {
    /// Kubernetes-style subject the identity endpoint expects.
    fn subject(&self) -> String {
        format!("system:serviceaccount:{}:{}", self.project, self.service_identity_name)
    }
}

/// [`TokenProvider`] backed by a [`GdchServiceAccountKey`].
pub(crate) struct GdchTokenProvider {
    key: GdchServiceAccountKey,
    audience: String,
    client: reqwest::Client,
    signer: OnceCell<Signer>,
}

impl GdchTokenProvider {
    pub(crate) fn new(key: GdchServiceAccountKey, audience: String, client: reqwest::Client) -> Self {
        Self { key, audience, client, signer: OnceCell::new() }
    }

    async fn sign_subject_token(&self) -> Result<String> {
        let signer = self
            .signer
            .get_or_try_init(|| async { Signer::from_pem(self.key.private_key.expose_secret()) })
            .await?;

        let subject = self.key.subject();
        let claims = AssertionClaims::issued_now(&subject, &self.key.token_uri, None);
        signer.sign(&self.key.private_key_id, &claims)
    }
}

#[async_trait]
impl TokenProvider for GdchTokenProvider {
    async fn token(&self) -> Result<Token> {
        let subject_token = self.sign_subject_token().await?;
        let form = [
            ("grant_type", TOKEN_EXCHANGE_GRANT),
            ("audience", self.audience.as_str()),
            ("requested_token_type", ACCESS_TOKEN_TYPE),
            ("subject_token_type", SERVICE_ACCOUNT_TOKEN_TYPE),
            ("subject_token", subject_token.as_str()),
        ];
        request_token(&self.client, &self.key.token_uri, &form).await
    }
}

impl fmt::Debug for GdchTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GdchTokenProvider")
            .field("project", &self.key.project)
            .field("name", &self.key.service_identity_name)
            .field("audience", &self.audience)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> GdchServiceAccountKey {
        GdchServiceAccountKey {
            account_type: ACCOUNT_TYPE.to_string(),
            private_key_id: "key-1".to_string(),
            private_key: "unparsed".into(),
            project: "test-project".to_string(),
            service_identity_name: "collector".to_string(),
            token_uri: "https://localhost/token".to_string(),
        }
    }

    #[test]
    fn test_subject_format() {
        assert_eq!(key().subject(), "system:serviceaccount:test-project:collector");
    }

    #[test]
    fn test_key_deserializes_name_field() {
        let key: GdchServiceAccountKey = serde_json::from_str(
            r#"{
                "type": "gdch_service_account",
                "private_key_id": "k",
                "private_key": "pem",
                "project": "p",
                "name": "svc",
                "token_uri": "https://localhost/token"
            }"#,
        )
        .unwrap();

        assert_eq!(key.service_identity_name, "svc");
        assert_eq!(key.private_key.expose_secret(), "pem");
    }

    #[test]
    fn test_provider_debug_omits_key_material() {
        let provider =
            GdchTokenProvider::new(key(), "aud".to_string(), reqwest::Client::new());
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("unparsed"));
    }
}
