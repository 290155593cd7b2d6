// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use fieldclimate_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the HMAC keys from environment variables.
///
/// This provider looks for the following environment variables:
/// - `{PREFIX}_PUBLIC_KEY`
/// - `{PREFIX}_PRIVATE_KEY`
///
/// The prefix defaults to `FIELDCLIMATE`. Both values must be present and
/// non-empty, otherwise nothing is provided.
#[derive(Debug)]
pub struct EnvCredentialProvider {
    prefix: String,
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider using the `FIELDCLIMATE` prefix.
    pub fn new() -> Self {
        Self {
            prefix: FIELDCLIMATE_ENV_PREFIX.to_string(),
        }
    }

    /// Use another env prefix, for example `HMAC`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let public_key = ctx
            .env_var(&format!("{}_{PUBLIC_KEY_SUFFIX}", self.prefix))
            .filter(|v| !v.is_empty());
        let private_key = ctx
            .env_var(&format!("{}_{PRIVATE_KEY_SUFFIX}", self.prefix))
            .filter(|v| !v.is_empty());

        match (public_key, private_key) {
            (Some(public_key), Some(private_key)) => {
                Ok(Some(Credential::new(public_key, private_key)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldclimate_core::{OsEnv, StaticEnv};

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = ctx(&[
            ("FIELDCLIMATE_PUBLIC_KEY", "super"),
            ("FIELDCLIMATE_PRIVATE_KEY", "secret"),
        ]);

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred, Credential::new("super", "secret"));

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_with_prefix() -> anyhow::Result<()> {
        let ctx = ctx(&[
            ("HMAC_PUBLIC_KEY", "super"),
            ("HMAC_PRIVATE_KEY", "secret"),
        ]);

        assert!(EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .is_none());
        let cred = EnvCredentialProvider::new()
            .with_prefix("HMAC")
            .provide_credential(&ctx)
            .await?;
        assert_eq!(cred, Some(Credential::new("super", "secret")));

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        let ctx = ctx(&[
            ("FIELDCLIMATE_PUBLIC_KEY", "super"),
            ("FIELDCLIMATE_PRIVATE_KEY", ""),
        ]);

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[test]
    fn test_env_credential_provider_with_os_env() {
        temp_env::with_vars(
            vec![
                ("FIELDCLIMATE_PUBLIC_KEY", Some("super")),
                ("FIELDCLIMATE_PRIVATE_KEY", Some("secret")),
            ],
            || {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let ctx = Context::new().with_env(OsEnv);
                    let cred = EnvCredentialProvider::new()
                        .provide_credential(&ctx)
                        .await
                        .expect("load must succeed");
                    assert_eq!(cred, Some(Credential::new("super", "secret")));
                })
            },
        );
    }
}
