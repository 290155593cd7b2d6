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

//! FieldClimate API client.
//!
//! This crate signs requests with the FieldClimate HMAC scheme, cleans the
//! arguments of every endpoint and sends the result through the transport
//! configured on a [`fieldclimate_core::Context`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use fieldclimate_api::{route, Client, Config};
//! use fieldclimate_core::{Context, OsEnv};
//!
//! # async fn example(ctx: Context) -> fieldclimate_core::Result<()> {
//! let ctx = ctx.with_env(OsEnv);
//! let client = Client::new(ctx, Config::new())?;
//!
//! let stations = client.send(route::get_user_stations()).await?;
//! for station in stations.as_array().into_iter().flatten() {
//!     let data = client
//!         .send(route::get_data_last("normal", station, "raw", "4h")?)
//!         .await?;
//!     println!("{data}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::{FIELDCLIMATE_BASE_URL, FIELDCLIMATE_ENV_PREFIX};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{sign, RequestSigner, SignedHeaders};

pub mod clean;

pub mod route;
pub use route::Route;

mod client;
pub use client::Client;
