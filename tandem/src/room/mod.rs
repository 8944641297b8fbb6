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

use tandem_rtc::{self as rtc, ObjectId, ParticipantIdentity, RoomSid};
use tandem_utils::observer::Dispatcher;
use tokio::sync::mpsc;

use crate::{
    bridge::{self, Bridge},
    context::Context,
    enums::{ConnectionState, MediaDeviceKind},
    error::{FacadeError, FacadeResult},
    options::{ConnectOptions, RoomOptions},
    participant::{LocalParticipant, Participant, RemoteParticipant},
};

mod events;

pub use events::RoomEvent;

facade_handle!(
    /// A room created through a [`Context`].
    ///
    /// The room stops reporting events once it disconnected. Connecting again
    /// resumes them.
    Room => RoomInner
);

impl Room {
    pub fn name(&self) -> String {
        self.inner.instance.name()
    }

    pub fn sid(&self) -> Option<RoomSid> {
        self.inner.instance.sid()
    }

    pub fn metadata(&self) -> Option<String> {
        self.inner.instance.metadata()
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.instance.state().into()
    }

    pub fn num_participants(&self) -> u32 {
        self.inner.instance.num_participants()
    }

    pub fn is_recording(&self) -> bool {
        self.inner.instance.is_recording()
    }

    pub fn can_playback_audio(&self) -> bool {
        self.inner.instance.can_playback_audio()
    }

    pub fn is_e2ee_enabled(&self) -> bool {
        self.inner.instance.is_e2ee_enabled()
    }

    pub fn options(&self) -> RoomOptions {
        self.inner.instance.options().into()
    }

    pub fn local_participant(&self) -> FacadeResult<LocalParticipant> {
        LocalParticipant::wrap(&self.inner.ctx, self.inner.instance.local_participant())
    }

    pub fn remote_participants(&self) -> FacadeResult<Vec<RemoteParticipant>> {
        self.inner
            .instance
            .remote_participants()
            .into_iter()
            .map(|participant| RemoteParticipant::wrap(&self.inner.ctx, participant))
            .collect()
    }

    pub fn remote_participant(
        &self,
        identity: &ParticipantIdentity,
    ) -> FacadeResult<Option<RemoteParticipant>> {
        self.inner
            .instance
            .remote_participant(identity)
            .map(|participant| RemoteParticipant::wrap(&self.inner.ctx, participant))
            .transpose()
    }

    pub fn active_speakers(&self) -> FacadeResult<Vec<Participant>> {
        self.inner
            .instance
            .active_speakers()
            .iter()
            .map(|participant| Participant::wrap_any(&self.inner.ctx, participant))
            .collect()
    }

    /// Connects to `url`, resuming the room's events if it disconnected before.
    pub async fn connect(
        &self,
        url: &str,
        token: &str,
        options: ConnectOptions,
    ) -> FacadeResult<()> {
        self.inner.reattach()?;
        Ok(self.inner.instance.connect(url, token, options).await?)
    }

    pub async fn disconnect(&self, stop_tracks: bool) -> FacadeResult<()> {
        Ok(self.inner.instance.disconnect(stop_tracks).await?)
    }

    pub async fn start_audio(&self) -> FacadeResult<()> {
        Ok(self.inner.instance.start_audio().await?)
    }

    pub async fn switch_active_device(
        &self,
        kind: MediaDeviceKind,
        device_id: &str,
    ) -> FacadeResult<bool> {
        Ok(self.inner.instance.switch_active_device(kind.into(), device_id).await?)
    }

    pub fn active_device(&self, kind: MediaDeviceKind) -> Option<String> {
        self.inner.instance.active_device(kind.into())
    }

    pub async fn set_e2ee_enabled(&self, enabled: bool) -> FacadeResult<()> {
        Ok(self.inner.instance.set_e2ee_enabled(enabled).await?)
    }

    pub fn register_text_stream_handler<F>(&self, _topic: &str, _handler: F) -> FacadeResult<()>
    where
        F: Fn(String, ParticipantIdentity) + Send + Sync + 'static,
    {
        Err(FacadeError::NotImplemented("Room::register_text_stream_handler"))
    }

    pub fn register_byte_stream_handler<F>(&self, _topic: &str, _handler: F) -> FacadeResult<()>
    where
        F: Fn(Vec<u8>, ParticipantIdentity) + Send + Sync + 'static,
    {
        Err(FacadeError::NotImplemented("Room::register_byte_stream_handler"))
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<RoomEvent> {
        self.inner.dispatcher.register()
    }

    /// Returns the facade previously created for `room`.
    pub fn from_instance(ctx: &Arc<Context>, room: &Arc<dyn rtc::Room>) -> FacadeResult<Self> {
        ctx.ensure_ready()?;
        let id = room.object_id();
        ctx.rooms
            .get(id)
            .map(Self::from_inner)
            .ok_or_else(|| FacadeError::NotFound(format!("no facade for room {}", id)))
    }

    pub(crate) fn wrap(ctx: &Arc<Context>, room: Arc<dyn rtc::Room>) -> FacadeResult<Self> {
        ctx.ensure_ready()?;

        let id = room.object_id();
        let inner = ctx.rooms.get_or_try_insert_with(id, || -> FacadeResult<_> {
            log::debug!("wrapping {} ({})", room.class_name(), id);
            Ok(Arc::new(RoomInner {
                ctx: ctx.clone(),
                id,
                instance: room.clone(),
                dispatcher: Default::default(),
                bridge: Default::default(),
            }))
        })?;

        inner.attach();
        Ok(Self::from_inner(inner))
    }
}

pub(crate) struct RoomInner {
    ctx: Arc<Context>,
    id: ObjectId,
    instance: Arc<dyn rtc::Room>,
    dispatcher: Dispatcher<RoomEvent>,
    bridge: Bridge,
}

impl RoomInner {
    /// The listener keeps this facade alive until the bridge is detached.
    fn listener(self: &Arc<Self>) -> rtc::Listener<rtc::RoomEvent> {
        let inner = self.clone();
        Arc::new(move |event| inner.on_event(event))
    }

    fn attach(self: &Arc<Self>) {
        if self.bridge.attach(|| self.instance.add_listener(self.listener())) {
            log::debug!("room {} attached", self.id);
        }
    }

    fn reattach(self: &Arc<Self>) -> FacadeResult<()> {
        self.ctx.ensure_ready()?;
        if self.bridge.reattach(|| self.instance.add_listener(self.listener())) {
            log::debug!("room {} reattached", self.id);
        }
        Ok(())
    }

    fn on_event(&self, event: &rtc::RoomEvent) {
        let translated = RoomEvent::translate(&self.ctx, event);

        // Entities that left the room stop reporting before subscribers see it
        if let Ok(translated) = &translated {
            match translated {
                RoomEvent::ParticipantDisconnected(participant) => {
                    participant.inner.teardown();
                }
                RoomEvent::TrackUnpublished { publication, .. } => {
                    publication.inner.teardown();
                }
                RoomEvent::LocalTrackUnpublished { publication, .. } => {
                    publication.inner.teardown();
                }
                _ => {}
            }
        }

        bridge::forward(&self.ctx, ("room", self.id), translated, &self.dispatcher);

        if let rtc::RoomEvent::Disconnected { .. } = event {
            self.teardown();
        }
    }

    fn teardown(&self) {
        if self.bridge.detach(|id| self.instance.remove_listener(id)) {
            log::debug!("room {} detached", self.id);
        }
    }

    pub(crate) fn close(&self) {
        self.teardown();
        self.dispatcher.clear();
    }
}

impl Drop for RoomInner {
    fn drop(&mut self) {
        self.ctx.rooms.purge(self.id);
    }
}
