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

use super::{track_dispatch, LocalAudioTrack, LocalVideoTrack, Track, TrackEvent};
use crate::{
    context::Context,
    enums::{StreamState, TrackKind, TrackSource},
    error::FacadeResult,
    options::TrackDimensions,
    stats::SenderStats,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocalTrack {
    Audio(LocalAudioTrack),
    Video(LocalVideoTrack),
}

impl LocalTrack {
    track_dispatch!([Audio, Video]);

    enum_dispatch!(
        [Audio, Video];
        pub async fn mute(self: &Self) -> FacadeResult<()>;
        pub async fn unmute(self: &Self) -> FacadeResult<()>;
        pub fn device_id(self: &Self) -> Option<String>;
        pub async fn set_device_id(self: &Self, device_id: &str) -> FacadeResult<bool>;
        pub async fn pause_upstream(self: &Self) -> FacadeResult<()>;
        pub async fn resume_upstream(self: &Self) -> FacadeResult<()>;
        pub fn is_upstream_paused(self: &Self) -> bool;
        pub async fn sender_stats(self: &Self) -> FacadeResult<Vec<SenderStats>>;
        pub(crate) fn upstream(self: &Self) -> Arc<dyn rtc::LocalTrack>;
    );

    pub(crate) fn wrap(ctx: &Arc<Context>, track: Arc<dyn rtc::LocalTrack>) -> FacadeResult<Self> {
        Ok(Track::wrap(ctx, rtc::TrackVariant::Local(track))?.try_into()?)
    }
}

impl From<LocalAudioTrack> for LocalTrack {
    fn from(track: LocalAudioTrack) -> Self {
        Self::Audio(track)
    }
}

impl From<LocalVideoTrack> for LocalTrack {
    fn from(track: LocalVideoTrack) -> Self {
        Self::Video(track)
    }
}
