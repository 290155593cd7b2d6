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

use std::fmt::{Debug, Formatter};

use crate::constants::*;
use fieldclimate_core::{utils::Redact, Context};

/// Config carries all the configuration for the FieldClimate client.
///
/// Empty strings are treated exactly like unset values.
#[derive(Clone, Default)]
pub struct Config {
    /// `public_key` will be loaded from
    ///
    /// - this field if it's set
    /// - env value: `{env_prefix}_PUBLIC_KEY`
    /// - the defaults passed to [`Config::merge`]
    pub public_key: Option<String>,
    /// `private_key` will be loaded from
    ///
    /// - this field if it's set
    /// - env value: `{env_prefix}_PRIVATE_KEY`
    /// - the defaults passed to [`Config::merge`]
    pub private_key: Option<String>,
    /// Base url of the API, defaults to [`FIELDCLIMATE_BASE_URL`].
    pub base_url: Option<String>,
    /// Prefix of the key env values, defaults to `FIELDCLIMATE`.
    pub env_prefix: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set public_key
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Set private_key
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set env_prefix
    pub fn with_env_prefix(mut self, env_prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(env_prefix.into());
        self
    }

    /// The base url in use.
    pub fn base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => FIELDCLIMATE_BASE_URL,
        }
    }

    /// The env prefix in use.
    pub fn env_prefix(&self) -> &str {
        match self.env_prefix.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => FIELDCLIMATE_ENV_PREFIX,
        }
    }

    /// Load unset keys from env.
    ///
    /// Values already present in this config always win.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let prefix = self.env_prefix().to_string();

        fill(
            &mut self.public_key,
            ctx.env_var(&format!("{prefix}_{PUBLIC_KEY_SUFFIX}")),
        );
        fill(
            &mut self.private_key,
            ctx.env_var(&format!("{prefix}_{PRIVATE_KEY_SUFFIX}")),
        );

        self
    }

    /// Fill every unset field from `defaults`.
    ///
    /// `explicit.from_env(ctx).merge(defaults)` yields the resolution order
    /// explicit value, then env, then defaults.
    pub fn merge(mut self, defaults: Config) -> Self {
        fill(&mut self.public_key, defaults.public_key);
        fill(&mut self.private_key, defaults.private_key);
        fill(&mut self.base_url, defaults.base_url);
        fill(&mut self.env_prefix, defaults.env_prefix);

        self
    }
}

fn fill(field: &mut Option<String>, value: Option<String>) {
    if field.as_deref().is_some_and(|v| !v.is_empty()) {
        return;
    }
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        *field = Some(v);
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("public_key", &self.public_key.as_ref().map(Redact::from))
            .field("private_key", &self.private_key.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .field("env_prefix", &self.env_prefix)
            .finish()
    }
}
