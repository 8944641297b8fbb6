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

use std::fmt::Debug;

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use thiserror::Error;

use crate::access_token::{AccessToken, AccessTokenError, VideoGrants};

pub use rest_client::{RestError, RestErrorCode, RestResult};

pub mod room;

mod rest_client;

pub const API_PREFIX: &str = "api";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid environment: {0}")]
    Env(#[from] std::env::VarError),
    #[error("invalid access token: {0}")]
    AccessToken(#[from] AccessTokenError),
    #[error("rest error: {0}")]
    Rest(#[from] RestError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

struct ServiceBase {
    api_key: String,
    api_secret: String,
}

impl Debug for ServiceBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceBase").field("api_key", &self.api_key).finish()
    }
}

impl ServiceBase {
    pub fn with_api_key(api_key: &str, api_secret: &str) -> Self {
        Self { api_key: api_key.to_owned(), api_secret: api_secret.to_owned() }
    }

    pub fn token(&self) -> AccessToken {
        AccessToken::with_api_key(&self.api_key, &self.api_secret)
    }

    pub fn auth_header(&self, grants: VideoGrants) -> Result<HeaderMap, AccessTokenError> {
        let token = self.token().with_grants(grants).to_jwt()?;

        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_: InvalidHeaderValue| AccessTokenError::InvalidKeys)?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}
