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

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{rest_client::RestClient, ServiceBase, ServiceResult, API_PREFIX};
use crate::{access_token::VideoGrants, get_env_keys};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomOptions {
    pub empty_timeout: u32,
    pub departure_timeout: u32,
    pub max_participants: u32,
    pub metadata: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_timeout: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokenOptions {
    pub name: String,
    pub metadata: String,
    /// Lifetime of the token in seconds, the server default when zero.
    pub ttl: u64,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    pub sid: String,
    pub name: String,
    pub empty_timeout: u32,
    pub departure_timeout: u32,
    pub max_participants: u32,
    pub creation_time: i64,
    pub metadata: String,
    pub num_participants: u32,
    pub num_publishers: u32,
    pub active_recording: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub token: String,
    /// Signaling url the token is valid for.
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRoomRequest<'a> {
    name: &'a str,
    #[serde(flatten)]
    options: CreateRoomOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionTokenRequest<'a> {
    identity: &'a str,
    #[serde(flatten)]
    options: SessionTokenOptions,
}

#[derive(Deserialize)]
struct ListRoomsResponse {
    #[serde(default)]
    rooms: Vec<Room>,
}

#[derive(Debug)]
pub struct RoomClient {
    base: ServiceBase,
    client: RestClient,
}

impl RoomClient {
    pub fn with_api_key(host: &str, api_key: &str, api_secret: &str) -> Self {
        Self {
            base: ServiceBase::with_api_key(api_key, api_secret),
            client: RestClient::new(host, API_PREFIX),
        }
    }

    /// Reads the keys from `TANDEM_API_KEY` and `TANDEM_API_SECRET`.
    pub fn new(host: &str) -> ServiceResult<Self> {
        let (api_key, api_secret) = get_env_keys()?;
        Ok(Self::with_api_key(host, &api_key, &api_secret))
    }

    pub async fn create_room(&self, name: &str, options: CreateRoomOptions) -> ServiceResult<Room> {
        let request = CreateRoomRequest { name, options };
        self.client
            .request(
                Method::POST,
                "rooms",
                Some(&request),
                self.base.auth_header(VideoGrants { room_create: true, ..Default::default() })?,
            )
            .await
            .map_err(Into::into)
    }

    /// Lists the rooms named in `names`, or every active room when empty.
    pub async fn list_rooms(&self, names: Vec<String>) -> ServiceResult<Vec<Room>> {
        let path = if names.is_empty() {
            "rooms".to_owned()
        } else {
            format!("rooms?names={}", names.join(","))
        };
        let resp: ListRoomsResponse = self
            .client
            .request(
                Method::GET,
                &path,
                None::<&()>,
                self.base.auth_header(VideoGrants { room_list: true, ..Default::default() })?,
            )
            .await?;

        Ok(resp.rooms)
    }

    pub async fn get_room(&self, room: &str) -> ServiceResult<Room> {
        self.client
            .request(
                Method::GET,
                &format!("rooms/{}", room),
                None::<&()>,
                self.base.auth_header(VideoGrants { room_list: true, ..Default::default() })?,
            )
            .await
            .map_err(Into::into)
    }

    pub async fn update_room(&self, room: &str, options: UpdateRoomOptions) -> ServiceResult<Room> {
        self.client
            .request(
                Method::PATCH,
                &format!("rooms/{}", room),
                Some(&options),
                self.base.auth_header(VideoGrants {
                    room_admin: true,
                    room: room.to_owned(),
                    ..Default::default()
                })?,
            )
            .await
            .map_err(Into::into)
    }

    pub async fn delete_room(&self, room: &str) -> ServiceResult<()> {
        self.client
            .request(
                Method::DELETE,
                &format!("rooms/{}", room),
                None::<&()>,
                self.base.auth_header(VideoGrants { room_create: true, ..Default::default() })?,
            )
            .await
            .map_err(Into::into)
    }

    /// Asks the server for a token that lets `identity` join `room`.
    pub async fn create_session_token(
        &self,
        room: &str,
        identity: &str,
        options: SessionTokenOptions,
    ) -> ServiceResult<SessionToken> {
        let request = SessionTokenRequest { identity, options };
        self.client
            .request(
                Method::POST,
                &format!("rooms/{}/tokens", room),
                Some(&request),
                self.base.auth_header(VideoGrants {
                    room_admin: true,
                    room: room.to_owned(),
                    ..Default::default()
                })?,
            )
            .await
            .map_err(Into::into)
    }
}
