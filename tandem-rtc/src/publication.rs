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

#[derive(Debug, Clone)]
pub enum PublicationEvent {
    Muted,
    Unmuted,
    Ended,
    UpstreamPaused,
    UpstreamResumed,
    Subscribed(Arc<dyn Track>),
    Unsubscribed(Arc<dyn Track>),
    SubscriptionFailed(SubscriptionError),
    SubscriptionStatusChanged { status: SubscriptionStatus, previous: SubscriptionStatus },
    SubscriptionPermissionChanged { status: PermissionStatus, previous: PermissionStatus },
}

#[async_trait]
pub trait TrackPublication: RtcHandle {
    fn sid(&self) -> TrackSid;
    fn name(&self) -> String;
    fn kind(&self) -> TrackKind;
    fn source(&self) -> TrackSource;
    fn mime_type(&self) -> String;
    fn dimensions(&self) -> Option<TrackDimensions>;
    fn is_simulcasted(&self) -> bool;
    fn is_muted(&self) -> bool;
    fn is_subscribed(&self) -> bool;
    fn is_enabled(&self) -> bool;
    fn encryption_type(&self) -> EncryptionType;
    fn audio_features(&self) -> Vec<AudioTrackFeature>;
    fn track(&self) -> Option<Arc<dyn Track>>;

    /// Concrete runtime type of this publication.
    fn variant(self: Arc<Self>) -> PublicationVariant;

    fn add_listener(&self, listener: Listener<PublicationEvent>) -> ListenerId;
    fn remove_listener(&self, id: ListenerId) -> bool;
}

#[async_trait]
pub trait LocalTrackPublication: TrackPublication {
    async fn mute(&self) -> RtcResult<()>;
    async fn unmute(&self) -> RtcResult<()>;
    async fn pause_upstream(&self) -> RtcResult<()>;
    async fn resume_upstream(&self) -> RtcResult<()>;
    fn publish_options(&self) -> TrackPublishOptions;
    fn local_track(&self) -> Option<Arc<dyn LocalTrack>>;
}

#[async_trait]
pub trait RemoteTrackPublication: TrackPublication {
    fn subscription_status(&self) -> SubscriptionStatus;
    fn permission_status(&self) -> PermissionStatus;
    fn is_desired(&self) -> bool;
    fn set_subscribed(&self, subscribed: bool);
    fn set_enabled(&self, enabled: bool);
    fn video_quality(&self) -> Option<VideoQuality>;
    fn set_video_quality(&self, quality: VideoQuality);
    fn set_video_dimensions(&self, dimensions: TrackDimensions);
    fn set_video_fps(&self, fps: f64);
    fn remote_track(&self) -> Option<Arc<dyn RemoteTrack>>;
}

#[derive(Clone, Debug)]
pub enum PublicationVariant {
    Local(Arc<dyn LocalTrackPublication>),
    Remote(Arc<dyn RemoteTrackPublication>),
}

impl PublicationVariant {
    enum_dispatch!(
        [Local, Remote];
        pub fn object_id(self: &Self) -> ObjectId;
        pub fn class_name(self: &Self) -> &'static str;
        pub fn sid(self: &Self) -> TrackSid;
        pub fn name(self: &Self) -> String;
        pub fn kind(self: &Self) -> TrackKind;
        pub fn source(self: &Self) -> TrackSource;
        pub fn mime_type(self: &Self) -> String;
        pub fn dimensions(self: &Self) -> Option<TrackDimensions>;
        pub fn is_simulcasted(self: &Self) -> bool;
        pub fn is_muted(self: &Self) -> bool;
        pub fn is_subscribed(self: &Self) -> bool;
        pub fn is_enabled(self: &Self) -> bool;
        pub fn encryption_type(self: &Self) -> EncryptionType;
        pub fn audio_features(self: &Self) -> Vec<AudioTrackFeature>;
        pub fn track(self: &Self) -> Option<Arc<dyn Track>>;
        pub fn add_listener(self: &Self, listener: Listener<PublicationEvent>) -> ListenerId;
        pub fn remove_listener(self: &Self, id: ListenerId) -> bool;
    );

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}
