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

use std::env;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use fieldclimate_api::{route, sign, Client, Config, Credential};
use fieldclimate_core::{Context, OsEnv};
use fieldclimate_http_send_reqwest::ReqwestHttpSend;
use log::{debug, warn};

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("FIELDCLIMATE_TEST").as_deref() != Ok("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let config = Config::new()
        .with_public_key(
            env::var("FIELDCLIMATE_PUBLIC_KEY").expect("env FIELDCLIMATE_PUBLIC_KEY must set"),
        )
        .with_private_key(
            env::var("FIELDCLIMATE_PRIVATE_KEY").expect("env FIELDCLIMATE_PRIVATE_KEY must set"),
        );

    Some(Client::new(ctx, config).expect("client must be created"))
}

#[test]
fn test_sign_known_vector() -> Result<()> {
    let now = Utc.with_ymd_and_hms(2018, 10, 22, 22, 22, 22).unwrap();
    let signed = sign("GET", "/route", &Credential::new("super", "secret"), now)?;

    assert_eq!(signed.date, "Mon, 22 Oct 2018 22:22:22 GMT");
    assert_eq!(
        signed.authorization,
        "hmac super:ad202a3c38834bb3b53697ea8df5cc4b342264619986d9786c0b9363d94ecabf"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_system_status() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("FIELDCLIMATE_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client.send(route::get_system_status()).await?;
    debug!("got response: {resp}");
    Ok(())
}

#[tokio::test]
async fn test_get_user_stations_and_data() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("FIELDCLIMATE_TEST is not set, skipped");
        return Ok(());
    };

    let stations = client.send(route::get_user_stations()).await?;
    debug!("got stations: {stations}");

    let Some(station) = stations.as_array().and_then(|v| v.first()) else {
        warn!("account has no station, skip data check");
        return Ok(());
    };

    let range = client.send(route::get_data_range(station)).await?;
    debug!("got data range: {range}");

    let data = client
        .send(route::get_data_last("normal", station, "hourly", "1d")?)
        .await?;
    debug!("got data: {data}");
    Ok(())
}
