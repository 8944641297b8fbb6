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

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tandem_utils::enum_dispatch;

use crate::prelude::*;

#[derive(Debug, Clone)]
pub enum ParticipantEvent {
    TrackPublished(Arc<dyn TrackPublication>),
    TrackUnpublished(Arc<dyn TrackPublication>),
    TrackSubscribed {
        track: Arc<dyn Track>,
        publication: Arc<dyn TrackPublication>,
    },
    TrackUnsubscribed {
        track: Arc<dyn Track>,
        publication: Arc<dyn TrackPublication>,
    },
    TrackSubscriptionFailed {
        track_sid: TrackSid,
        error: Option<SubscriptionError>,
    },
    TrackMuted(Arc<dyn TrackPublication>),
    TrackUnmuted(Arc<dyn TrackPublication>),
    LocalTrackPublished(Arc<dyn TrackPublication>),
    LocalTrackUnpublished(Arc<dyn TrackPublication>),
    MetadataChanged {
        previous: Option<String>,
    },
    NameChanged(String),
    AttributesChanged(HashMap<String, String>),
    IsSpeakingChanged(bool),
    ConnectionQualityChanged(ConnectionQuality),
    EncryptionStatusChanged(bool),
    DataReceived {
        payload: Arc<Vec<u8>>,
        kind: DataPacketKind,
        topic: Option<String>,
    },
    TrackStreamStateChanged {
        publication: Arc<dyn TrackPublication>,
        state: StreamState,
    },
    TrackSubscriptionPermissionChanged {
        publication: Arc<dyn TrackPublication>,
        status: PermissionStatus,
    },
    TrackSubscriptionStatusChanged {
        publication: Arc<dyn TrackPublication>,
        status: SubscriptionStatus,
    },
}

#[async_trait]
pub trait Participant: RtcHandle {
    fn sid(&self) -> ParticipantSid;
    fn identity(&self) -> ParticipantIdentity;
    fn name(&self) -> String;
    fn metadata(&self) -> Option<String>;
    fn attributes(&self) -> HashMap<String, String>;
    fn kind(&self) -> ParticipantKind;

    /// Flag reported by the participant itself, independent from its runtime type.
    fn is_local(&self) -> bool;

    fn is_speaking(&self) -> bool;
    fn audio_level(&self) -> f32;
    fn connection_quality(&self) -> ConnectionQuality;
    fn is_encrypted(&self) -> bool;
    fn is_camera_enabled(&self) -> bool;
    fn is_microphone_enabled(&self) -> bool;
    fn is_screen_share_enabled(&self) -> bool;
    fn track_publications(&self) -> Vec<Arc<dyn TrackPublication>>;
    fn track_publication(&self, sid: &TrackSid) -> Option<Arc<dyn TrackPublication>>;
    fn track_publication_by_source(&self, source: TrackSource)
        -> Option<Arc<dyn TrackPublication>>;

    fn variant(self: Arc<Self>) -> ParticipantVariant;

    fn add_listener(&self, listener: Listener<ParticipantEvent>) -> ListenerId;
    fn remove_listener(&self, id: ListenerId) -> bool;
}

#[async_trait]
pub trait LocalParticipant: Participant {
    async fn publish_track(
        &self,
        track: Arc<dyn LocalTrack>,
        options: TrackPublishOptions,
    ) -> RtcResult<Arc<dyn LocalTrackPublication>>;

    async fn unpublish_track(
        &self,
        sid: &TrackSid,
        stop_on_unpublish: bool,
    ) -> RtcResult<Arc<dyn LocalTrackPublication>>;

    async fn set_camera_enabled(
        &self,
        enabled: bool,
        options: Option<VideoCaptureOptions>,
    ) -> RtcResult<Option<Arc<dyn LocalTrackPublication>>>;

    async fn set_microphone_enabled(
        &self,
        enabled: bool,
        options: Option<AudioCaptureOptions>,
    ) -> RtcResult<Option<Arc<dyn LocalTrackPublication>>>;

    async fn set_screen_share_enabled(
        &self,
        enabled: bool,
        options: Option<ScreenShareCaptureOptions>,
    ) -> RtcResult<Option<Arc<dyn LocalTrackPublication>>>;

    async fn publish_data(&self, payload: Vec<u8>, options: DataPublishOptions) -> RtcResult<()>;
    async fn set_metadata(&self, metadata: String) -> RtcResult<()>;
    async fn set_name(&self, name: String) -> RtcResult<()>;
    async fn set_attributes(&self, attributes: HashMap<String, String>) -> RtcResult<()>;

    fn set_track_subscription_permissions(
        &self,
        all_participants_allowed: bool,
        permissions: Vec<TrackPermission>,
    );

    fn local_track_publications(&self) -> Vec<Arc<dyn LocalTrackPublication>>;
}

#[async_trait]
pub trait RemoteParticipant: Participant {
    fn volume(&self, source: TrackSource) -> Option<f32>;
    fn set_volume(&self, volume: f32, source: TrackSource);
    fn remote_track_publications(&self) -> Vec<Arc<dyn RemoteTrackPublication>>;
}

#[derive(Clone, Debug)]
pub enum ParticipantVariant {
    Local(Arc<dyn LocalParticipant>),
    Remote(Arc<dyn RemoteParticipant>),
}

impl ParticipantVariant {
    enum_dispatch!(
        [Local, Remote];
        pub fn object_id(self: &Self) -> ObjectId;
        pub fn class_name(self: &Self) -> &'static str;
        pub fn sid(self: &Self) -> ParticipantSid;
        pub fn identity(self: &Self) -> ParticipantIdentity;
        pub fn name(self: &Self) -> String;
        pub fn metadata(self: &Self) -> Option<String>;
        pub fn attributes(self: &Self) -> HashMap<String, String>;
        pub fn kind(self: &Self) -> ParticipantKind;
        pub fn is_local(self: &Self) -> bool;
        pub fn is_speaking(self: &Self) -> bool;
        pub fn audio_level(self: &Self) -> f32;
        pub fn connection_quality(self: &Self) -> ConnectionQuality;
        pub fn is_encrypted(self: &Self) -> bool;
        pub fn is_camera_enabled(self: &Self) -> bool;
        pub fn is_microphone_enabled(self: &Self) -> bool;
        pub fn is_screen_share_enabled(self: &Self) -> bool;
        pub fn track_publications(self: &Self) -> Vec<Arc<dyn TrackPublication>>;
        pub fn track_publication(self: &Self, sid: &TrackSid)
            -> Option<Arc<dyn TrackPublication>>;
        pub fn track_publication_by_source(self: &Self, source: TrackSource)
            -> Option<Arc<dyn TrackPublication>>;
        pub fn add_listener(self: &Self, listener: Listener<ParticipantEvent>) -> ListenerId;
        pub fn remove_listener(self: &Self, id: ListenerId) -> bool;
    );
}
