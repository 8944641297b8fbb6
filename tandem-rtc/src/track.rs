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
use tandem_utils::enum_dispatch;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackEvent {
    Muted,
    Unmuted,
    Ended,
    Restarted,
    UpstreamPaused,
    UpstreamResumed,
    StreamStateChanged(StreamState),
    VideoDimensionsChanged(TrackDimensions),
    AudioSilenceDetected,
}

#[async_trait]
pub trait Track: RtcHandle {
    /// Local tracks only get a sid once published.
    fn sid(&self) -> Option<TrackSid>;
    fn name(&self) -> String;
    fn kind(&self) -> TrackKind;
    fn source(&self) -> TrackSource;
    fn is_muted(&self) -> bool;
    fn stream_state(&self) -> StreamState;
    fn media_stream_track_id(&self) -> String;
    fn dimensions(&self) -> Option<TrackDimensions>;
    fn stop(&self);

    /// Concrete runtime type of this track.
    fn variant(self: Arc<Self>) -> TrackVariant;

    fn into_track(self: Arc<Self>) -> Arc<dyn Track>;

    fn add_listener(&self, listener: Listener<TrackEvent>) -> ListenerId;
    fn remove_listener(&self, id: ListenerId) -> bool;
}

#[async_trait]
pub trait LocalTrack: Track {
    async fn mute(&self) -> RtcResult<()>;
    async fn unmute(&self) -> RtcResult<()>;
    async fn restart(&self, options: Option<TrackCaptureOptions>) -> RtcResult<()>;
    async fn set_device_id(&self, device_id: &str) -> RtcResult<bool>;
    fn device_id(&self) -> Option<String>;
    async fn pause_upstream(&self) -> RtcResult<()>;
    async fn resume_upstream(&self) -> RtcResult<()>;
    fn is_upstream_paused(&self) -> bool;

    /// Video tracks only.
    fn set_publishing_quality(&self, quality: VideoQuality) -> RtcResult<()>;

    /// Video tracks only.
    async fn add_simulcast_layer(&self, codec: VideoCodec, encoding: VideoEncoding)
        -> RtcResult<()>;

    async fn sender_stats(&self) -> RtcResult<Vec<SenderStats>>;
}

#[async_trait]
pub trait RemoteTrack: Track {
    /// `None` for video tracks.
    fn volume(&self) -> Option<f32>;
    fn set_volume(&self, volume: f32);
    fn playout_delay(&self) -> Option<f64>;
    fn set_playout_delay(&self, delay: f64);
    fn is_adaptive_stream(&self) -> bool;
    async fn receiver_stats(&self) -> RtcResult<Option<ReceiverStats>>;
}

#[derive(Clone, Debug)]
pub enum TrackVariant {
    Local(Arc<dyn LocalTrack>),
    Remote(Arc<dyn RemoteTrack>),
}

impl TrackVariant {
    enum_dispatch!(
        [Local, Remote];
        pub fn object_id(self: &Self) -> ObjectId;
        pub fn class_name(self: &Self) -> &'static str;
        pub fn sid(self: &Self) -> Option<TrackSid>;
        pub fn name(self: &Self) -> String;
        pub fn kind(self: &Self) -> TrackKind;
        pub fn source(self: &Self) -> TrackSource;
        pub fn is_muted(self: &Self) -> bool;
        pub fn stream_state(self: &Self) -> StreamState;
        pub fn media_stream_track_id(self: &Self) -> String;
        pub fn dimensions(self: &Self) -> Option<TrackDimensions>;
        pub fn stop(self: &Self);
        pub fn add_listener(self: &Self, listener: Listener<TrackEvent>) -> ListenerId;
        pub fn remove_listener(self: &Self, id: ListenerId) -> bool;
    );

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    pub fn into_track(self) -> Arc<dyn Track> {
        match self {
            Self::Local(track) => track.into_track(),
            Self::Remote(track) => track.into_track(),
        }
    }
}
