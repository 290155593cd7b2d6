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

use std::sync::Arc;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, Uri};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::*;
use crate::credential::Credential;
use crate::provide_credential::ConfigCredentialProvider;
use crate::route::Route;
use crate::sign_request::RequestSigner;
use fieldclimate_core::{Context, Error, ProvideCredential, Result, Signer};

/// Client sends signed requests to the FieldClimate API.
///
/// Every request gets a fresh `Date` and signature. The resolved key pair
/// is cached by the inner [`Signer`].
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a client from config.
    ///
    /// Keys are resolved lazily on the first request, so a config without
    /// keys only fails once something is sent.
    pub fn new(ctx: Context, config: crate::Config) -> Result<Self> {
        let provider = ConfigCredentialProvider::new(Arc::new(config.clone()));
        Self::with_credential_provider(ctx, config, provider)
    }

    /// Create a client that loads keys from a custom provider.
    ///
    /// Only `base_url` is read from `config`.
    pub fn with_credential_provider(
        ctx: Context,
        config: crate::Config,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let base_url = config.base_url().trim_end_matches('/').to_string();
        let uri: Uri = base_url.parse().map_err(|e| {
            Error::config_invalid(format!("base url {base_url} is invalid")).with_source(e)
        })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "base url {base_url} must be absolute"
            )));
        }

        let signer = Signer::new(ctx, provider, RequestSigner::new(uri.path()));
        Ok(Self { base_url, signer })
    }

    /// The base url requests are sent to, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base url with a route path.
    pub fn full_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sign and send a route, returning the decoded JSON body.
    ///
    /// Status codes are not interpreted: error documents returned by the
    /// API come back like any other body. An empty body decodes to
    /// [`Value::Null`].
    pub async fn send(&self, route: Route) -> Result<Value> {
        let body = self.send_raw(route).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        decode(&body)
    }

    /// Sign and send a route, decoding the JSON body into `T`.
    pub async fn send_as<T: DeserializeOwned>(&self, route: Route) -> Result<T> {
        let body = self.send_raw(route).await?;
        decode(&body)
    }

    async fn send_raw(&self, route: Route) -> Result<Bytes> {
        let url = self.full_url(&route.path);
        let mut req = http::Request::builder()
            .method(route.method.clone())
            .uri(url.as_str());

        let body = match &route.body {
            Some(v) if route.method == Method::POST || route.method == Method::PUT => {
                req = req.header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
                Bytes::from(serde_json::to_vec(v).map_err(|e| {
                    Error::unexpected("serialize request body").with_source(e)
                })?)
            }
            _ => Bytes::new(),
        };

        let (mut parts, body) = req.body(body)?.into_parts();
        self.signer.sign(&mut parts).await?;

        debug!("sending request: {} {url}", parts.method);
        let resp = self
            .signer
            .context()
            .http_send(http::Request::from_parts(parts, body))
            .await?;
        debug!("got response: {} {url}", resp.status());

        Ok(resp.into_body())
    }

    /// Send a GET request to `path`.
    pub async fn get(&self, path: impl Into<String>) -> Result<Value> {
        self.send(Route::get(path)).await
    }

    /// Send a POST request with a JSON body to `path`.
    pub async fn post(&self, path: impl Into<String>, body: Value) -> Result<Value> {
        self.send(Route::post(path, body)).await
    }

    /// Send a PUT request with a JSON body to `path`.
    pub async fn put(&self, path: impl Into<String>, body: Value) -> Result<Value> {
        self.send(Route::put(path, body)).await
    }

    /// Send a DELETE request to `path`.
    pub async fn delete(&self, path: impl Into<String>) -> Result<Value> {
        self.send(Route::delete(path)).await
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| Error::unexpected("decode response body as json").with_source(e))
}
