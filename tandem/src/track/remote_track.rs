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

use tandem_rtc::{self as rtc, ObjectId, TrackSid};
use tandem_utils::enum_dispatch;
use tokio::sync::mpsc;

use super::{track_dispatch, RemoteAudioTrack, RemoteVideoTrack, Track, TrackEvent};
use crate::{
    context::Context,
    enums::{StreamState, TrackKind, TrackSource},
    error::FacadeResult,
    options::TrackDimensions,
    stats::ReceiverStats,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteTrack {
    Audio(RemoteAudioTrack),
    Video(RemoteVideoTrack),
}

impl RemoteTrack {
    track_dispatch!([Audio, Video]);

    enum_dispatch!(
        [Audio, Video];
        pub fn playout_delay(self: &Self) -> Option<f64>;
        pub fn set_playout_delay(self: &Self, delay: f64);
        pub fn is_adaptive_stream(self: &Self) -> bool;
        pub async fn receiver_stats(self: &Self) -> FacadeResult<Option<ReceiverStats>>;
    );

    pub(crate) fn wrap(ctx: &Arc<Context>, track: Arc<dyn rtc::RemoteTrack>) -> FacadeResult<Self> {
        Ok(Track::wrap(ctx, rtc::TrackVariant::Remote(track))?.try_into()?)
    }
}
