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

//! Client for the FieldClimate weather station API.
//!
//! Requests are signed with the FieldClimate HMAC scheme and their
//! arguments are cleaned before anything is sent.
//!
//! # Example
//!
//! ```no_run
//! use fieldclimate::route;
//!
//! # #[tokio::main]
//! # async fn main() -> fieldclimate::Result<()> {
//! // Keys are read from FIELDCLIMATE_PUBLIC_KEY and FIELDCLIMATE_PRIVATE_KEY.
//! let client = fieldclimate::default_client()?;
//!
//! let user = client.send(route::get_user()).await?;
//! println!("{user}");
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `default-context`: enable [`default_context`] and [`default_client`],
//!   backed by [`reqwest`](https://docs.rs/reqwest) and the OS environment.

#![warn(missing_docs)]

pub use fieldclimate_api::*;
pub use fieldclimate_core::*;

#[cfg(feature = "default-context")]
pub use fieldclimate_http_send_reqwest::ReqwestHttpSend;

/// Create a context with the reqwest transport and the OS environment.
#[cfg(feature = "default-context")]
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a client with the default context and configuration.
///
/// Keys come from `FIELDCLIMATE_PUBLIC_KEY` and `FIELDCLIMATE_PRIVATE_KEY`,
/// and are read on the first request.
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<Client> {
    Client::new(default_context(), Config::new())
}

#[cfg(all(test, feature = "default-context"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_client() -> Result<()> {
        let client = default_client()?;
        assert_eq!(client.base_url(), FIELDCLIMATE_BASE_URL);
        Ok(())
    }

    #[test]
    fn test_default_context_reads_os_env() {
        temp_env::with_var("FIELDCLIMATE_PUBLIC_KEY", Some("env_public"), || {
            let ctx = default_context();
            assert_eq!(
                ctx.env_var("FIELDCLIMATE_PUBLIC_KEY").as_deref(),
                Some("env_public")
            );
        });
    }

    #[test]
    fn test_default_client_without_keys() {
        temp_env::with_vars_unset(
            ["FIELDCLIMATE_PUBLIC_KEY", "FIELDCLIMATE_PRIVATE_KEY"],
            || {
                let rt = tokio::runtime::Runtime::new().unwrap();
                let err = rt
                    .block_on(async { default_client()?.send(route::get_user()).await })
                    .unwrap_err();
                assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
            },
        );
    }
}
