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

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{next_sid, MockLocalPublication, MockLocalTrack, MockRemotePublication, MockRoom};
use crate::prelude::*;

/// State shared by both participant mocks.
struct ParticipantState {
    sid: ParticipantSid,
    identity: ParticipantIdentity,
    name: Mutex<String>,
    metadata: Mutex<Option<String>>,
    attributes: Mutex<HashMap<String, String>>,
    kind: ParticipantKind,
    speaking: AtomicBool,
    audio_level: Mutex<f32>,
    quality: Mutex<ConnectionQuality>,
    encrypted: AtomicBool,
    listeners: ListenerSet<ParticipantEvent>,
}

impl ParticipantState {
    fn new(identity: &str, kind: ParticipantKind) -> Self {
        Self {
            sid: next_sid("PA").into(),
            identity: identity.into(),
            name: Mutex::new(identity.to_owned()),
            metadata: Default::default(),
            attributes: Default::default(),
            kind,
            speaking: AtomicBool::new(false),
            audio_level: Mutex::new(0.0),
            quality: Mutex::new(ConnectionQuality::Unknown),
            encrypted: AtomicBool::new(false),
            listeners: Default::default(),
        }
    }

    fn replace_metadata(&self, metadata: String) -> Option<String> {
        self.metadata.lock().replace(metadata)
    }

    fn merge_attributes(&self, changed: &HashMap<String, String>) {
        let mut attributes = self.attributes.lock();
        for (key, value) in changed {
            if value.is_empty() {
                attributes.remove(key);
            } else {
                attributes.insert(key.clone(), value.clone());
            }
        }
    }
}

macro_rules! participant_common {
    ($ty:ty, $class_name:literal) => {
        impl RtcHandle for $ty {
            fn object_id(&self) -> ObjectId {
                self.id
            }

            fn class_name(&self) -> &'static str {
                $class_name
            }
        }

        impl $ty {
            pub fn emit(&self, event: ParticipantEvent) {
                self.state.listeners.emit(&event);
            }

            pub fn listener_count(&self) -> usize {
                self.state.listeners.len()
            }

            pub fn set_speaking(&self, speaking: bool, audio_level: f32) {
                *self.state.audio_level.lock() = audio_level;
                if self.state.speaking.swap(speaking, Ordering::SeqCst) != speaking {
                    self.emit(ParticipantEvent::IsSpeakingChanged(speaking));
                }
            }

            pub fn set_connection_quality(&self, quality: ConnectionQuality) {
                *self.state.quality.lock() = quality;
                self.notify(ParticipantEvent::ConnectionQualityChanged(quality), |participant| {
                    RoomEvent::ConnectionQualityChanged { quality, participant }
                });
            }

            pub fn set_encrypted(&self, encrypted: bool) {
                if self.state.encrypted.swap(encrypted, Ordering::SeqCst) != encrypted {
                    let event = ParticipantEvent::EncryptionStatusChanged(encrypted);
                    self.notify(event, |participant| {
                        RoomEvent::ParticipantEncryptionStatusChanged {
                            encrypted,
                            participant: Some(participant),
                        }
                    });
                }
            }

            /// Emits `event` on this participant, then the event built by
            /// `room_event` on the room it belongs to.
            pub(crate) fn notify(
                &self,
                event: ParticipantEvent,
                room_event: impl FnOnce(Arc<dyn Participant>) -> RoomEvent,
            ) {
                self.emit(event);

                let (Some(this), Some(room)) = (self.weak_self.upgrade(), self.room.upgrade())
                else {
                    return;
                };
                let this: Arc<dyn Participant> = this;
                room.emit(room_event(this));
            }

            pub(crate) fn notify_track_muted(
                &self,
                publication: Arc<dyn TrackPublication>,
                muted: bool,
            ) {
                let event = if muted {
                    ParticipantEvent::TrackMuted(publication.clone())
                } else {
                    ParticipantEvent::TrackUnmuted(publication.clone())
                };
                self.notify(event, |participant| {
                    if muted {
                        RoomEvent::TrackMuted { publication, participant }
                    } else {
                        RoomEvent::TrackUnmuted { publication, participant }
                    }
                });
            }
        }
    };
}

pub struct MockLocalParticipant {
    id: ObjectId,
    weak_self: Weak<Self>,
    state: ParticipantState,
    room: Weak<MockRoom>,
    encryption_type: EncryptionType,
    publications: Mutex<Vec<Arc<MockLocalPublication>>>,
    permissions: Mutex<(bool, Vec<TrackPermission>)>,
    sent_data: Mutex<Vec<(Vec<u8>, DataPublishOptions)>>,
    fail_next_publish: Mutex<Option<RtcError>>,
}

participant_common!(MockLocalParticipant, "LocalParticipant");

impl MockLocalParticipant {
    pub(crate) fn new(
        identity: &str,
        encryption_type: EncryptionType,
        room: Weak<MockRoom>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            id: ObjectId::next(),
            weak_self: weak_self.clone(),
            state: ParticipantState::new(identity, ParticipantKind::Standard),
            room,
            encryption_type,
            publications: Default::default(),
            permissions: Mutex::new((true, Vec::new())),
            sent_data: Default::default(),
            fail_next_publish: Default::default(),
        })
    }

    /// The next `publish_track` call fails with `error`.
    pub fn fail_next_publish(&self, error: RtcError) {
        *self.fail_next_publish.lock() = Some(error);
    }

    pub fn subscription_permissions(&self) -> (bool, Vec<TrackPermission>) {
        self.permissions.lock().clone()
    }

    pub fn sent_data(&self) -> Vec<(Vec<u8>, DataPublishOptions)> {
        self.sent_data.lock().clone()
    }

    fn find_by_source(&self, source: TrackSource) -> Option<Arc<MockLocalPublication>> {
        self.publications.lock().iter().find(|p| p.source() == source).cloned()
    }

    async fn set_source_enabled(
        &self,
        source: TrackSource,
        enabled: bool,
        capture: Option<TrackCaptureOptions>,
    ) -> RtcResult<Option<Arc<dyn LocalTrackPublication>>> {
        let existing = self.find_by_source(source);

        match (enabled, existing) {
            (true, Some(publication)) => {
                publication.unmute().await?;
                Ok(Some(publication))
            }
            (true, None) => {
                let kind = match source {
                    TrackSource::Microphone | TrackSource::ScreenshareAudio => TrackKind::Audio,
                    _ => TrackKind::Video,
                };
                let device_id = match capture {
                    Some(TrackCaptureOptions::Audio(options)) => options.device_id,
                    Some(TrackCaptureOptions::Video(options)) => options.device_id,
                    None => None,
                };

                let track = MockLocalTrack::with_device(kind, source, device_id);
                let options = TrackPublishOptions { source, ..Default::default() };
                Ok(Some(self.publish_track(track, options).await?))
            }
            (false, Some(publication)) if source == TrackSource::Screenshare => {
                Ok(Some(self.unpublish_track(&publication.sid(), true).await?))
            }
            (false, Some(publication)) => {
                publication.mute().await?;
                Ok(Some(publication))
            }
            (false, None) => Ok(None),
        }
    }
}

#[async_trait]
impl Participant for MockLocalParticipant {
    fn sid(&self) -> ParticipantSid {
        self.state.sid.clone()
    }

    fn identity(&self) -> ParticipantIdentity {
        self.state.identity.clone()
    }

    fn name(&self) -> String {
        self.state.name.lock().clone()
    }

    fn metadata(&self) -> Option<String> {
        self.state.metadata.lock().clone()
    }

    fn attributes(&self) -> HashMap<String, String> {
        self.state.attributes.lock().clone()
    }

    fn kind(&self) -> ParticipantKind {
        self.state.kind
    }

    fn is_local(&self) -> bool {
        true
    }

    fn is_speaking(&self) -> bool {
        self.state.speaking.load(Ordering::SeqCst)
    }

    fn audio_level(&self) -> f32 {
        *self.state.audio_level.lock()
    }

    fn connection_quality(&self) -> ConnectionQuality {
        *self.state.quality.lock()
    }

    fn is_encrypted(&self) -> bool {
        self.state.encrypted.load(Ordering::SeqCst)
    }

    fn is_camera_enabled(&self) -> bool {
        self.find_by_source(TrackSource::Camera).map_or(false, |p| !p.is_muted())
    }

    fn is_microphone_enabled(&self) -> bool {
        self.find_by_source(TrackSource::Microphone).map_or(false, |p| !p.is_muted())
    }

    fn is_screen_share_enabled(&self) -> bool {
        self.find_by_source(TrackSource::Screenshare).map_or(false, |p| !p.is_muted())
    }

    fn track_publications(&self) -> Vec<Arc<dyn TrackPublication>> {
        self.publications.lock().iter().map(|p| p.clone() as Arc<dyn TrackPublication>).collect()
    }

    fn track_publication(&self, sid: &TrackSid) -> Option<Arc<dyn TrackPublication>> {
        self.publications
            .lock()
            .iter()
            .find(|p| p.sid() == *sid)
            .map(|p| p.clone() as Arc<dyn TrackPublication>)
    }

    fn track_publication_by_source(
        &self,
        source: TrackSource,
    ) -> Option<Arc<dyn TrackPublication>> {
        self.find_by_source(source).map(|p| p as Arc<dyn TrackPublication>)
    }

    fn variant(self: Arc<Self>) -> ParticipantVariant {
        ParticipantVariant::Local(self)
    }

    fn add_listener(&self, listener: Listener<ParticipantEvent>) -> ListenerId {
        self.state.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.state.listeners.remove(id)
    }
}

#[async_trait]
impl LocalParticipant for MockLocalParticipant {
    async fn publish_track(
        &self,
        track: Arc<dyn LocalTrack>,
        options: TrackPublishOptions,
    ) -> RtcResult<Arc<dyn LocalTrackPublication>> {
        if let Some(error) = self.fail_next_publish.lock().take() {
            return Err(error);
        }

        let already_published =
            self.publications.lock().iter().any(|p| p.track_object_id() == track.object_id());
        if already_published {
            return Err(RtcError::Publish("track already published".into()));
        }

        let publication = MockLocalPublication::new(
            track,
            options,
            self.encryption_type,
            self.weak_self.clone(),
        );
        self.publications.lock().push(publication.clone());

        let published: Arc<dyn TrackPublication> = publication.clone();
        self.notify(ParticipantEvent::LocalTrackPublished(published.clone()), |participant| {
            RoomEvent::LocalTrackPublished { publication: published, participant }
        });
        Ok(publication)
    }

    async fn unpublish_track(
        &self,
        sid: &TrackSid,
        stop_on_unpublish: bool,
    ) -> RtcResult<Arc<dyn LocalTrackPublication>> {
        let publication = {
            let mut publications = self.publications.lock();
            let index = publications.iter().position(|p| p.sid() == *sid).ok_or_else(|| {
                RtcError::Track(format!("could not find published track with sid: {}", sid))
            })?;
            publications.remove(index)
        };

        if stop_on_unpublish {
            if let Some(track) = publication.local_track() {
                track.stop();
            }
        }
        publication.emit(PublicationEvent::Ended);

        let unpublished: Arc<dyn TrackPublication> = publication.clone();
        self.notify(ParticipantEvent::LocalTrackUnpublished(unpublished.clone()), |participant| {
            RoomEvent::LocalTrackUnpublished { publication: unpublished, participant }
        });
        Ok(publication)
    }

    async fn set_camera_enabled(
        &self,
        enabled: bool,
        options: Option<VideoCaptureOptions>,
    ) -> RtcResult<Option<Arc<dyn LocalTrackPublication>>> {
        let options = options.map(TrackCaptureOptions::Video);
        self.set_source_enabled(TrackSource::Camera, enabled, options).await
    }

    async fn set_microphone_enabled(
        &self,
        enabled: bool,
        options: Option<AudioCaptureOptions>,
    ) -> RtcResult<Option<Arc<dyn LocalTrackPublication>>> {
        self.set_source_enabled(
            TrackSource::Microphone,
            enabled,
            options.map(TrackCaptureOptions::Audio),
        )
        .await
    }

    async fn set_screen_share_enabled(
        &self,
        enabled: bool,
        _options: Option<ScreenShareCaptureOptions>,
    ) -> RtcResult<Option<Arc<dyn LocalTrackPublication>>> {
        self.set_source_enabled(TrackSource::Screenshare, enabled, None).await
    }

    async fn publish_data(&self, payload: Vec<u8>, options: DataPublishOptions) -> RtcResult<()> {
        let connected =
            self.room.upgrade().map_or(false, |room| room.state() == ConnectionState::Connected);
        if !connected {
            return Err(RtcError::Connection("cannot publish data while disconnected".into()));
        }

        self.sent_data.lock().push((payload, options));
        Ok(())
    }

    async fn set_metadata(&self, metadata: String) -> RtcResult<()> {
        let previous = self.state.replace_metadata(metadata);
        let event = ParticipantEvent::MetadataChanged { previous: previous.clone() };
        self.notify(event, |participant| RoomEvent::ParticipantMetadataChanged {
            previous,
            participant,
        });
        Ok(())
    }

    async fn set_name(&self, name: String) -> RtcResult<()> {
        *self.state.name.lock() = name.clone();
        self.notify(ParticipantEvent::NameChanged(name.clone()), |participant| {
            RoomEvent::ParticipantNameChanged { name, participant }
        });
        Ok(())
    }

    async fn set_attributes(&self, attributes: HashMap<String, String>) -> RtcResult<()> {
        self.state.merge_attributes(&attributes);
        self.notify(ParticipantEvent::AttributesChanged(attributes.clone()), |participant| {
            RoomEvent::ParticipantAttributesChanged { changed: attributes, participant }
        });
        Ok(())
    }

    fn set_track_subscription_permissions(
        &self,
        all_participants_allowed: bool,
        permissions: Vec<TrackPermission>,
    ) {
        *self.permissions.lock() = (all_participants_allowed, permissions);
    }

    fn local_track_publications(&self) -> Vec<Arc<dyn LocalTrackPublication>> {
        self.publications
            .lock()
            .iter()
            .map(|p| p.clone() as Arc<dyn LocalTrackPublication>)
            .collect()
    }
}

pub struct MockRemoteParticipant {
    id: ObjectId,
    weak_self: Weak<Self>,
    state: ParticipantState,
    room: Weak<MockRoom>,
    reported_local: AtomicBool,
    publications: Mutex<Vec<Arc<MockRemotePublication>>>,
    volumes: Mutex<HashMap<TrackSource, f32>>,
}

participant_common!(MockRemoteParticipant, "RemoteParticipant");

impl MockRemoteParticipant {
    pub(crate) fn new(identity: &str, kind: ParticipantKind, room: Weak<MockRoom>) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            id: ObjectId::next(),
            weak_self: weak_self.clone(),
            state: ParticipantState::new(identity, kind),
            room,
            reported_local: AtomicBool::new(false),
            publications: Default::default(),
            volumes: Default::default(),
        })
    }

    /// A participant that does not belong to any room.
    pub fn detached(identity: &str) -> Arc<Self> {
        Self::new(identity, ParticipantKind::Standard, Weak::new())
    }

    /// Makes `is_local` report `local`, regardless of the runtime type.
    pub fn set_reported_local(&self, local: bool) {
        self.reported_local.store(local, Ordering::SeqCst);
    }

    /// The participant starts publishing a track; it is not subscribed yet.
    pub fn publish_track(
        &self,
        name: &str,
        kind: TrackKind,
        source: TrackSource,
    ) -> Arc<MockRemotePublication> {
        let publication =
            MockRemotePublication::new(name.to_owned(), kind, source, self.weak_self.clone());
        self.publications.lock().push(publication.clone());

        let published: Arc<dyn TrackPublication> = publication.clone();
        self.notify(ParticipantEvent::TrackPublished(published.clone()), |participant| {
            RoomEvent::TrackPublished { publication: published, participant }
        });
        publication
    }

    pub fn unpublish_track(&self, sid: &TrackSid) -> Option<Arc<MockRemotePublication>> {
        let publication = {
            let mut publications = self.publications.lock();
            let index = publications.iter().position(|p| p.sid() == *sid)?;
            publications.remove(index)
        };

        if publication.is_subscribed() {
            publication.set_subscribed(false);
        }
        publication.emit(PublicationEvent::Ended);

        let unpublished: Arc<dyn TrackPublication> = publication.clone();
        self.notify(ParticipantEvent::TrackUnpublished(unpublished.clone()), |participant| {
            RoomEvent::TrackUnpublished { publication: unpublished, participant }
        });
        Some(publication)
    }

    pub fn update_metadata(&self, metadata: &str) {
        let previous = self.state.replace_metadata(metadata.to_owned());
        let event = ParticipantEvent::MetadataChanged { previous: previous.clone() };
        self.notify(event, |participant| RoomEvent::ParticipantMetadataChanged {
            previous,
            participant,
        });
    }

    pub fn update_name(&self, name: &str) {
        *self.state.name.lock() = name.to_owned();
        let name = name.to_owned();
        self.notify(ParticipantEvent::NameChanged(name.clone()), |participant| {
            RoomEvent::ParticipantNameChanged { name, participant }
        });
    }

    pub fn update_attributes(&self, changed: HashMap<String, String>) {
        self.state.merge_attributes(&changed);
        self.notify(ParticipantEvent::AttributesChanged(changed.clone()), |participant| {
            RoomEvent::ParticipantAttributesChanged { changed, participant }
        });
    }

    pub fn send_data(&self, payload: &[u8], kind: DataPacketKind, topic: Option<&str>) {
        let payload = Arc::new(payload.to_vec());
        let topic = topic.map(str::to_owned);
        self.notify(
            ParticipantEvent::DataReceived { payload: payload.clone(), kind, topic: topic.clone() },
            |participant| RoomEvent::DataReceived {
                payload,
                participant: Some(participant),
                kind,
                topic,
            },
        );
    }

    pub(crate) fn notify_track_subscribed(
        &self,
        track: Arc<dyn Track>,
        publication: Arc<dyn TrackPublication>,
        subscribed: bool,
    ) {
        let event = if subscribed {
            ParticipantEvent::TrackSubscribed {
                track: track.clone(),
                publication: publication.clone(),
            }
        } else {
            ParticipantEvent::TrackUnsubscribed {
                track: track.clone(),
                publication: publication.clone(),
            }
        };
        self.notify(event, |participant| {
            if subscribed {
                RoomEvent::TrackSubscribed { track, publication, participant }
            } else {
                RoomEvent::TrackUnsubscribed { track, publication, participant }
            }
        });
    }

    pub(crate) fn notify_subscription_failed(&self, track_sid: TrackSid, error: SubscriptionError) {
        self.notify(
            ParticipantEvent::TrackSubscriptionFailed {
                track_sid: track_sid.clone(),
                error: Some(error),
            },
            |participant| RoomEvent::TrackSubscriptionFailed {
                track_sid,
                participant,
                error: Some(error),
            },
        );
    }

    pub(crate) fn notify_permission_changed(
        &self,
        publication: Arc<dyn TrackPublication>,
        status: PermissionStatus,
    ) {
        self.notify(
            ParticipantEvent::TrackSubscriptionPermissionChanged {
                publication: publication.clone(),
                status,
            },
            |participant| RoomEvent::TrackSubscriptionPermissionChanged {
                publication,
                status,
                participant,
            },
        );
    }

    pub(crate) fn notify_subscription_status_changed(
        &self,
        publication: Arc<dyn TrackPublication>,
        status: SubscriptionStatus,
    ) {
        self.notify(
            ParticipantEvent::TrackSubscriptionStatusChanged {
                publication: publication.clone(),
                status,
            },
            |participant| RoomEvent::TrackSubscriptionStatusChanged {
                publication,
                status,
                participant,
            },
        );
    }

    fn find_by_source(&self, source: TrackSource) -> Option<Arc<MockRemotePublication>> {
        self.publications.lock().iter().find(|p| p.source() == source).cloned()
    }
}

#[async_trait]
impl Participant for MockRemoteParticipant {
    fn sid(&self) -> ParticipantSid {
        self.state.sid.clone()
    }

    fn identity(&self) -> ParticipantIdentity {
        self.state.identity.clone()
    }

    fn name(&self) -> String {
        self.state.name.lock().clone()
    }

    fn metadata(&self) -> Option<String> {
        self.state.metadata.lock().clone()
    }

    fn attributes(&self) -> HashMap<String, String> {
        self.state.attributes.lock().clone()
    }

    fn kind(&self) -> ParticipantKind {
        self.state.kind
    }

    fn is_local(&self) -> bool {
        self.reported_local.load(Ordering::SeqCst)
    }

    fn is_speaking(&self) -> bool {
        self.state.speaking.load(Ordering::SeqCst)
    }

    fn audio_level(&self) -> f32 {
        *self.state.audio_level.lock()
    }

    fn connection_quality(&self) -> ConnectionQuality {
        *self.state.quality.lock()
    }

    fn is_encrypted(&self) -> bool {
        self.state.encrypted.load(Ordering::SeqCst)
    }

    fn is_camera_enabled(&self) -> bool {
        self.find_by_source(TrackSource::Camera).map_or(false, |p| !p.is_muted())
    }

    fn is_microphone_enabled(&self) -> bool {
        self.find_by_source(TrackSource::Microphone).map_or(false, |p| !p.is_muted())
    }

    fn is_screen_share_enabled(&self) -> bool {
        self.find_by_source(TrackSource::Screenshare).map_or(false, |p| !p.is_muted())
    }

    fn track_publications(&self) -> Vec<Arc<dyn TrackPublication>> {
        self.publications.lock().iter().map(|p| p.clone() as Arc<dyn TrackPublication>).collect()
    }

    fn track_publication(&self, sid: &TrackSid) -> Option<Arc<dyn TrackPublication>> {
        self.publications
            .lock()
            .iter()
            .find(|p| p.sid() == *sid)
            .map(|p| p.clone() as Arc<dyn TrackPublication>)
    }

    fn track_publication_by_source(
        &self,
        source: TrackSource,
    ) -> Option<Arc<dyn TrackPublication>> {
        self.find_by_source(source).map(|p| p as Arc<dyn TrackPublication>)
    }

    fn variant(self: Arc<Self>) -> ParticipantVariant {
        ParticipantVariant::Remote(self)
    }

    fn add_listener(&self, listener: Listener<ParticipantEvent>) -> ListenerId {
        self.state.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.state.listeners.remove(id)
    }
}

#[async_trait]
impl RemoteParticipant for MockRemoteParticipant {
    fn volume(&self, source: TrackSource) -> Option<f32> {
        self.find_by_source(source)?;
        Some(self.volumes.lock().get(&source).copied().unwrap_or(1.0))
    }

    fn set_volume(&self, volume: f32, source: TrackSource) {
        self.volumes.lock().insert(source, volume);
        if let Some(track) = self.find_by_source(source).and_then(|p| p.mock_track()) {
            track.set_volume(volume);
        }
    }

    fn remote_track_publications(&self) -> Vec<Arc<dyn RemoteTrackPublication>> {
        self.publications
            .lock()
            .iter()
            .map(|p| p.clone() as Arc<dyn RemoteTrackPublication>)
            .collect()
    }
}
