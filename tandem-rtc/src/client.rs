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

use std::sync::Arc;

use async_trait::async_trait;

use crate::prelude::*;

/// Entry point of the client: creates rooms and captures local media.
#[async_trait]
pub trait RtcClient: Send + Sync {
    fn create_room(&self, options: RoomOptions) -> RtcResult<Arc<dyn Room>>;

    /// Lists the media devices of `kind`, or all devices when `kind` is `None`.
    async fn enumerate_devices(
        &self,
        kind: Option<MediaDeviceKind>,
        request_permissions: bool,
    ) -> RtcResult<Vec<MediaDeviceInfo>>;

    async fn create_local_tracks(
        &self,
        options: CreateLocalTracksOptions,
    ) -> RtcResult<Vec<Arc<dyn LocalTrack>>>;

    async fn create_local_screen_tracks(
        &self,
        options: ScreenShareCaptureOptions,
    ) -> RtcResult<Vec<Arc<dyn LocalTrack>>>;
}
