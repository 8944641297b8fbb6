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

use crate::prelude::*;

#[derive(Debug, Clone)]
pub enum RoomEvent {
    Connected,
    Reconnecting,
    SignalReconnecting,
    Reconnected,
    Disconnected {
        reason: Option<DisconnectReason>,
    },
    ConnectionStateChanged(ConnectionState),
    ParticipantConnected(Arc<dyn Participant>),
    ParticipantDisconnected(Arc<dyn Participant>),
    TrackPublished {
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    TrackUnpublished {
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    TrackSubscribed {
        track: Arc<dyn Track>,
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    TrackUnsubscribed {
        track: Arc<dyn Track>,
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    TrackSubscriptionFailed {
        track_sid: TrackSid,
        participant: Arc<dyn Participant>,
        error: Option<SubscriptionError>,
    },
    TrackMuted {
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    TrackUnmuted {
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    LocalTrackPublished {
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    LocalTrackUnpublished {
        publication: Arc<dyn TrackPublication>,
        participant: Arc<dyn Participant>,
    },
    LocalAudioSilenceDetected(Arc<dyn TrackPublication>),
    ActiveSpeakersChanged(Vec<Arc<dyn Participant>>),
    RoomMetadataChanged(String),
    ParticipantMetadataChanged {
        previous: Option<String>,
        participant: Arc<dyn Participant>,
    },
    ParticipantNameChanged {
        name: String,
        participant: Arc<dyn Participant>,
    },
    ParticipantAttributesChanged {
        changed: HashMap<String, String>,
        participant: Arc<dyn Participant>,
    },
    ParticipantEncryptionStatusChanged {
        encrypted: bool,
        participant: Option<Arc<dyn Participant>>,
    },
    ConnectionQualityChanged {
        quality: ConnectionQuality,
        participant: Arc<dyn Participant>,
    },
    DataReceived {
        payload: Arc<Vec<u8>>,
        participant: Option<Arc<dyn Participant>>,
        kind: DataPacketKind,
        topic: Option<String>,
    },
    TrackStreamStateChanged {
        publication: Arc<dyn TrackPublication>,
        state: StreamState,
        participant: Arc<dyn Participant>,
    },
    TrackSubscriptionPermissionChanged {
        publication: Arc<dyn TrackPublication>,
        status: PermissionStatus,
        participant: Arc<dyn Participant>,
    },
    TrackSubscriptionStatusChanged {
        publication: Arc<dyn TrackPublication>,
        status: SubscriptionStatus,
        participant: Arc<dyn Participant>,
    },
    AudioPlaybackStatusChanged(bool),
    MediaDevicesChanged,
    MediaDevicesError(String),
    ActiveDeviceChanged {
        kind: MediaDeviceKind,
        device_id: String,
    },
    RecordingStatusChanged(bool),
    EncryptionError(String),
}

#[async_trait]
pub trait Room: RtcHandle {
    fn name(&self) -> String;
    /// Assigned by the server once connected.
    fn sid(&self) -> Option<RoomSid>;
    fn metadata(&self) -> Option<String>;
    fn state(&self) -> ConnectionState;
    fn num_participants(&self) -> u32;
    fn is_recording(&self) -> bool;
    fn can_playback_audio(&self) -> bool;
    fn is_e2ee_enabled(&self) -> bool;
    fn options(&self) -> RoomOptions;

    fn local_participant(&self) -> Arc<dyn LocalParticipant>;
    fn remote_participants(&self) -> Vec<Arc<dyn RemoteParticipant>>;
    fn remote_participant(&self, identity: &ParticipantIdentity)
        -> Option<Arc<dyn RemoteParticipant>>;
    fn active_speakers(&self) -> Vec<Arc<dyn Participant>>;

    async fn connect(&self, url: &str, token: &str, options: ConnectOptions) -> RtcResult<()>;
    async fn disconnect(&self, stop_tracks: bool) -> RtcResult<()>;
    async fn start_audio(&self) -> RtcResult<()>;
    async fn switch_active_device(&self, kind: MediaDeviceKind, device_id: &str)
        -> RtcResult<bool>;
    fn active_device(&self, kind: MediaDeviceKind) -> Option<String>;
    async fn set_e2ee_enabled(&self, enabled: bool) -> RtcResult<()>;

    fn add_listener(&self, listener: Listener<RoomEvent>) -> ListenerId;
    fn remove_listener(&self, id: ListenerId) -> bool;
}
