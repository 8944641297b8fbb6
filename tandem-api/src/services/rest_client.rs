// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;

use reqwest::{header::HeaderMap, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("failed to execute the request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to decode the reply: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(String),
    #[error("server error {status}: {code}: {message}")]
    Api { status: StatusCode, code: String, message: String },
}

impl RestError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request(err) => err.status(),
            Self::Decode(_) | Self::Url(_) => None,
            Self::Api { status, .. } => Some(*status),
        }
    }
}

/// Body of a non-2xx reply.
#[derive(Debug, Deserialize)]
pub struct RestErrorCode {
    pub code: String,
    #[serde(alias = "msg")]
    pub message: String,
}

impl RestErrorCode {
    pub const UNKNOWN: &'static str = "unknown";
    pub const INVALID_ARGUMENT: &'static str = "invalid_argument";
    pub const NOT_FOUND: &'static str = "not_found";
    pub const ALREADY_EXISTS: &'static str = "already_exists";
    pub const PERMISSION_DENIED: &'static str = "permission_denied";
    pub const UNAUTHENTICATED: &'static str = "unauthenticated";
    pub const INTERNAL: &'static str = "internal";
    pub const UNAVAILABLE: &'static str = "unavailable";
}

impl Display for RestErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug)]
pub struct RestClient {
    host: String,
    prefix: String,
    client: reqwest::Client,
}

impl RestClient {
    pub fn new(host: &str, prefix: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_owned(),
            prefix: prefix.trim_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> RestResult<reqwest::Url> {
        let url = format!("{}/{}/{}", self.host, self.prefix, path.trim_start_matches('/'));
        reqwest::Url::parse(&url).map_err(|err| RestError::Url(format!("{url}: {err}")))
    }

    pub async fn request<D: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        data: Option<&D>,
        headers: HeaderMap,
    ) -> RestResult<R> {
        let url = self.url(path)?;
        log::debug!("{} {}", method, url);

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(data) = data {
            builder = builder.json(data);
        }
        let resp = builder.send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            // Empty replies decode as `null`, which fits `()` and `Option`
            let body = if body.is_empty() { "null" } else { body.as_str() };
            return Ok(serde_json::from_str(body)?);
        }

        let error = serde_json::from_str::<RestErrorCode>(&body).unwrap_or_else(|_| {
            RestErrorCode { code: RestErrorCode::UNKNOWN.to_owned(), message: body }
        });
        log::debug!("{} replied {}", status, error);
        Err(RestError::Api { status, code: error.code, message: error.message })
    }
}
