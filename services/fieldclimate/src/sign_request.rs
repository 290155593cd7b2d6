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

//! FieldClimate HMAC request signer.
//!
//! - [Authentication HMAC](https://api.fieldclimate.com/v1/docs/#authentication-hmac)

use http::header::{ACCEPT, AUTHORIZATION, DATE};
use http::HeaderValue;
use log::debug;

use crate::constants::*;
use crate::credential::Credential;
use fieldclimate_core::hash::hex_hmac_sha256;
use fieldclimate_core::time::{format_http_date, now, DateTime};
use fieldclimate_core::{Context, Error, Result, SignRequest};

/// Header values produced by [`sign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value of the `Date` header, like `Mon, 22 Oct 2018 22:22:22 GMT`.
    pub date: String,
    /// Value of the `Authorization` header, like `hmac {public_key}:{signature}`.
    pub authorization: String,
}

/// Compute the `Date` and `Authorization` values for one request.
///
/// `route` is the request path after the base url, with its leading slash
/// and without query, for example `/user/stations`.
///
/// Fails with a config error if either key is empty.
pub fn sign(method: &str, route: &str, cred: &Credential, now: DateTime) -> Result<SignedHeaders> {
    if cred.public_key.is_empty() || cred.private_key.is_empty() {
        return Err(Error::config_invalid(
            "public and private keys must be set for HMAC authentication",
        ));
    }

    let date = format_http_date(now);
    let string_to_sign = string_to_sign(method, route, &date, &cred.public_key);
    let signature = hex_hmac_sha256(cred.private_key.as_bytes(), string_to_sign.as_bytes());

    Ok(SignedHeaders {
        authorization: format!("hmac {}:{signature}", cred.public_key),
        date,
    })
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + Route + Date + PublicKey
/// ```
///
/// There are no separators between the parts.
fn string_to_sign(method: &str, route: &str, date: &str, public_key: &str) -> String {
    let mut s = String::with_capacity(method.len() + route.len() + date.len() + public_key.len());
    s.push_str(method);
    s.push_str(route);
    s.push_str(date);
    s.push_str(public_key);

    debug!("string to sign: {}", &s);
    s
}

/// RequestSigner that implements FieldClimate HMAC authentication.
///
/// It inserts `Accept`, `Date` and `Authorization` headers. The signed route
/// is the request path with the api base path (`/v1` for the default base
/// url) removed.
#[derive(Debug)]
pub struct RequestSigner {
    base_path: String,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer for requests sent under `base_path`.
    ///
    /// Pass the path component of the base url, for example `/v1`. An empty
    /// string or `/` signs the full request path.
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn route<'a>(&self, path: &'a str) -> &'a str {
        match path.strip_prefix(self.base_path.as_str()) {
            Some(route) if route.starts_with('/') => route,
            _ => path,
        }
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| {
            Error::config_invalid("public and private keys must be set for HMAC authentication")
        })?;
        let now = self.time.unwrap_or_else(now);

        let signed = sign(req.method.as_str(), self.route(req.uri.path()), cred, now)?;

        req.headers
            .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        req.headers.insert(DATE, signed.date.parse()?);
        req.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = signed.authorization.parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike, Utc};
    use fieldclimate_core::{ErrorKind, Signer};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::provide_credential::StaticCredentialProvider;

    fn test_time() -> DateTime {
        Utc.with_ymd_and_hms(2018, 10, 22, 22, 22, 22)
            .unwrap()
            .with_nanosecond(222_222_000)
            .unwrap()
    }

    #[test]
    fn test_sign() -> Result<()> {
        let signed = sign("GET", "/route", &Credential::new("super", "secret"), test_time())?;

        assert_eq!(
            signed,
            SignedHeaders {
                date: "Mon, 22 Oct 2018 22:22:22 GMT".to_string(),
                authorization:
                    "hmac super:ad202a3c38834bb3b53697ea8df5cc4b342264619986d9786c0b9363d94ecabf"
                        .to_string(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_sign_is_deterministic() -> Result<()> {
        let cred = Credential::new("super", "secret");
        let a = sign("POST", "/data/normal/0123/raw/last/4h", &cred, test_time())?;
        let b = sign("POST", "/data/normal/0123/raw/last/4h", &cred, test_time())?;
        assert_eq!(a, b);

        let c = sign("GET", "/data/normal/0123/raw/last/4h", &cred, test_time())?;
        assert_ne!(a.authorization, c.authorization);
        Ok(())
    }

    #[test]
    fn test_sign_without_keys() {
        for cred in [
            Credential::new("", "secret"),
            Credential::new("super", ""),
            Credential::new("", ""),
        ] {
            let err = sign("GET", "/route", &cred, test_time()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        }
    }

    #[test]
    fn test_route() {
        let signer = RequestSigner::new("/v1");
        assert_eq!(signer.route("/v1/user"), "/user");
        assert_eq!(signer.route("/v1"), "/v1");
        assert_eq!(signer.route("/v10/user"), "/v10/user");
        assert_eq!(signer.route("/route"), "/route");

        let signer = RequestSigner::new("/");
        assert_eq!(signer.route("/route"), "/route");
    }

    #[tokio::test]
    async fn test_sign_request() -> Result<()> {
        let signer = Signer::new(
            Context::new(),
            StaticCredentialProvider::new("super", "secret"),
            RequestSigner::new("/v1").with_time(test_time()),
        );

        let mut parts = http::Request::get("https://api.fieldclimate.com/v1/route")
            .body(())?
            .into_parts()
            .0;
        signer.sign(&mut parts).await?;

        assert_eq!(parts.headers[ACCEPT], "application/json");
        assert_eq!(parts.headers[DATE], "Mon, 22 Oct 2018 22:22:22 GMT");
        assert_eq!(
            parts.headers[AUTHORIZATION],
            "hmac super:ad202a3c38834bb3b53697ea8df5cc4b342264619986d9786c0b9363d94ecabf"
        );
        assert!(parts.headers[AUTHORIZATION].is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_uses_signing_time() -> Result<()> {
        let mut headers = Vec::new();
        for time in [test_time(), test_time() + chrono::TimeDelta::seconds(1)] {
            let signer = Signer::new(
                Context::new(),
                StaticCredentialProvider::new("super", "secret"),
                RequestSigner::new("/v1").with_time(time),
            );
            let mut parts = http::Request::get("https://api.fieldclimate.com/v1/route")
                .body(())?
                .into_parts()
                .0;
            signer.sign(&mut parts).await?;
            headers.push((parts.headers[DATE].clone(), parts.headers[AUTHORIZATION].clone()));
        }

        assert_eq!(headers[1].0, "Mon, 22 Oct 2018 22:22:23 GMT");
        assert_ne!(headers[0].0, headers[1].0);
        assert_ne!(headers[0].1, headers[1].1);
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_without_credential() {
        let signer = RequestSigner::new("/v1");
        let mut parts = http::Request::get("https://api.fieldclimate.com/v1/route")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let err = signer
            .sign_request(&Context::new(), &mut parts, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(parts.headers.get(AUTHORIZATION).is_none());
    }
}
