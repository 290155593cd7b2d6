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

use async_trait::async_trait;
use fieldclimate_core::{Context, ProvideCredential, Result};
use log::debug;
use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider resolves the keys from a [`Config`].
///
/// Each key is resolved on its own, highest priority first:
///
/// 1. the value set on the config
/// 2. env value `{PREFIX}_PUBLIC_KEY` / `{PREFIX}_PRIVATE_KEY`
/// 3. the defaults given by [`ConfigCredentialProvider::with_defaults`]
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
    defaults: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new provider via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            defaults: Arc::new(Config::default()),
        }
    }

    /// Set the lowest priority values, used when neither the config nor the
    /// env provide a key.
    pub fn with_defaults(mut self, defaults: Config) -> Self {
        self.defaults = Arc::new(defaults);
        self
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self
            .config
            .as_ref()
            .clone()
            .from_env(ctx)
            .merge(self.defaults.as_ref().clone());

        if let (Some(public_key), Some(private_key)) = (config.public_key, config.private_key) {
            return Ok(Some(Credential::new(public_key, private_key)));
        }

        debug!("config provides no complete key pair");
        Ok(None)
    }
}
