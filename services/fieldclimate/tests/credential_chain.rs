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

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fieldclimate_api::{
    ConfigCredentialProvider, Config, Credential, EnvCredentialProvider, StaticCredentialProvider,
};
use fieldclimate_core::{Context, ProvideCredential, ProvideCredentialChain, StaticEnv};

#[derive(Debug)]
struct CountingProvider {
    name: &'static str,
    return_credential: bool,
    call_count: Arc<Mutex<usize>>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        _ctx: &Context,
    ) -> fieldclimate_core::Result<Option<Self::Credential>> {
        *self.call_count.lock().unwrap() += 1;

        if self.return_credential {
            Ok(Some(Credential::new(
                format!("{}_public", self.name),
                format!("{}_private", self.name),
            )))
        } else {
            Ok(None)
        }
    }
}

fn counting(name: &'static str, return_credential: bool) -> (CountingProvider, Arc<Mutex<usize>>) {
    let call_count = Arc::new(Mutex::new(0));
    (
        CountingProvider {
            name,
            return_credential,
            call_count: call_count.clone(),
        },
        call_count,
    )
}

#[tokio::test]
async fn test_chain_stops_at_first_success() {
    let ctx = Context::new();

    let (p1, count1) = counting("provider1", false);
    let (p2, count2) = counting("provider2", true);
    let (p3, count3) = counting("provider3", true);
    let chain = ProvideCredentialChain::new().push(p1).push(p2).push(p3);

    let cred = chain
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("credential must be provided");
    assert_eq!(cred.public_key, "provider2_public");
    assert_eq!(cred.private_key, "provider2_private");

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(*count3.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_chain_all_providers_return_none() {
    let ctx = Context::new();

    let (p1, count1) = counting("provider1", false);
    let (p2, count2) = counting("provider2", false);
    let chain = ProvideCredentialChain::new().push(p1).push(p2);

    assert!(chain.provide_credential(&ctx).await.unwrap().is_none());
    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_empty_chain_returns_none() {
    let chain: ProvideCredentialChain<Credential> = ProvideCredentialChain::new();
    assert!(chain.provide_credential(&Context::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_chain_with_real_providers() {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            ("FIELDCLIMATE_PUBLIC_KEY".to_string(), "env_public".to_string()),
            ("FIELDCLIMATE_PRIVATE_KEY".to_string(), "env_private".to_string()),
        ]),
    });

    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new("static_public", "static_private"));
    let cred = chain.provide_credential(&ctx).await.unwrap().unwrap();
    assert_eq!(cred, Credential::new("env_public", "env_private"));

    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new().with_prefix("OTHER"))
        .push(ConfigCredentialProvider::new(Arc::new(Config::new())));
    let cred = chain.provide_credential(&ctx).await.unwrap().unwrap();
    assert_eq!(cred, Credential::new("env_public", "env_private"));
}

#[tokio::test]
async fn test_push_front_takes_priority() {
    let ctx = Context::new();

    let chain = ProvideCredentialChain::new()
        .push(StaticCredentialProvider::new("back_public", "back_private"))
        .push_front(StaticCredentialProvider::new("front_public", "front_private"));
    assert_eq!(chain.len(), 2);

    let cred = chain.provide_credential(&ctx).await.unwrap().unwrap();
    assert_eq!(cred.public_key, "front_public");
}
