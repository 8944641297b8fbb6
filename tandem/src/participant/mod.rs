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
    sync::Arc,
};

use tandem_rtc::{self as rtc, ObjectId, ParticipantIdentity, ParticipantSid, TrackSid};
use tandem_utils::{enum_dispatch, observer::Dispatcher};
use tokio::sync::mpsc;

use crate::{
    bridge::{self, Bridge, FacadeEvent},
    context::Context,
    dispatch::{self, ParticipantClass},
    enums::*,
    error::{ClassificationError, FacadeResult},
    publication::TrackPublication,
    track::Track,
};

macro_rules! participant_methods {
    () => {
        pub fn sid(&self) -> ParticipantSid {
            self.inner.instance.sid()
        }

        pub fn identity(&self) -> ParticipantIdentity {
            self.inner.instance.identity()
        }

        pub fn name(&self) -> String {
            self.inner.instance.name()
        }

        pub fn metadata(&self) -> Option<String> {
            self.inner.instance.metadata()
        }

        pub fn attributes(&self) -> HashMap<String, String> {
            self.inner.instance.attributes()
        }

        pub fn kind(&self) -> ParticipantKind {
            self.inner.instance.kind().into()
        }

        pub fn is_local(&self) -> bool {
            self.inner.class == ParticipantClass::Local
        }

        pub fn is_speaking(&self) -> bool {
            self.inner.instance.is_speaking()
        }

        pub fn audio_level(&self) -> f32 {
            self.inner.instance.audio_level()
        }

        pub fn connection_quality(&self) -> ConnectionQuality {
            self.inner.instance.connection_quality().into()
        }

        pub fn is_encrypted(&self) -> bool {
            self.inner.instance.is_encrypted()
        }

        pub fn is_camera_enabled(&self) -> bool {
            self.inner.instance.is_camera_enabled()
        }

        pub fn is_microphone_enabled(&self) -> bool {
            self.inner.instance.is_microphone_enabled()
        }

        pub fn is_screen_share_enabled(&self) -> bool {
            self.inner.instance.is_screen_share_enabled()
        }

        pub fn track_publications(&self) -> FacadeResult<Vec<TrackPublication>> {
            self.inner
                .instance
                .track_publications()
                .iter()
                .map(|publication| TrackPublication::wrap_any(&self.inner.ctx, publication))
                .collect()
        }

        pub fn track_publication(&self, sid: &TrackSid) -> FacadeResult<Option<TrackPublication>> {
            self.inner
                .instance
                .track_publication(sid)
                .map(|publication| TrackPublication::wrap_any(&self.inner.ctx, &publication))
                .transpose()
        }

        pub fn track_publication_by_source(
            &self,
            source: TrackSource,
        ) -> FacadeResult<Option<TrackPublication>> {
            self.inner
                .instance
                .track_publication_by_source(source.into())
                .map(|publication| TrackPublication::wrap_any(&self.inner.ctx, &publication))
                .transpose()
        }

        pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ParticipantEvent> {
            self.inner.dispatcher.register()
        }
    };
}

mod local_participant;
mod remote_participant;
mod rpc;

pub use local_participant::*;
pub use remote_participant::*;
pub use rpc::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantEvent {
    TrackPublished(TrackPublication),
    TrackUnpublished(TrackPublication),
    TrackSubscribed {
        track: Track,
        publication: TrackPublication,
    },
    TrackUnsubscribed {
        track: Track,
        publication: TrackPublication,
    },
    TrackSubscriptionFailed {
        track_sid: TrackSid,
        error: Option<SubscriptionError>,
    },
    TrackMuted(TrackPublication),
    TrackUnmuted(TrackPublication),
    LocalTrackPublished(TrackPublication),
    LocalTrackUnpublished(TrackPublication),
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
        publication: TrackPublication,
        state: StreamState,
    },
    TrackSubscriptionPermissionChanged {
        publication: TrackPublication,
        status: PermissionStatus,
    },
    TrackSubscriptionStatusChanged {
        publication: TrackPublication,
        status: SubscriptionStatus,
    },
}

impl ParticipantEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TrackPublished(_) => "TRACK_PUBLISHED",
            Self::TrackUnpublished(_) => "TRACK_UNPUBLISHED",
            Self::TrackSubscribed { .. } => "TRACK_SUBSCRIBED",
            Self::TrackUnsubscribed { .. } => "TRACK_UNSUBSCRIBED",
            Self::TrackSubscriptionFailed { .. } => "TRACK_SUBSCRIPTION_FAILED",
            Self::TrackMuted(_) => "TRACK_MUTED",
            Self::TrackUnmuted(_) => "TRACK_UNMUTED",
            Self::LocalTrackPublished(_) => "LOCAL_TRACK_PUBLISHED",
            Self::LocalTrackUnpublished(_) => "LOCAL_TRACK_UNPUBLISHED",
            Self::MetadataChanged { .. } => "METADATA_CHANGED",
            Self::NameChanged(_) => "NAME_CHANGED",
            Self::AttributesChanged(_) => "ATTRIBUTES_CHANGED",
            Self::IsSpeakingChanged(_) => "IS_SPEAKING_CHANGED",
            Self::ConnectionQualityChanged(_) => "CONNECTION_QUALITY_CHANGED",
            Self::EncryptionStatusChanged(_) => "ENCRYPTION_STATUS_CHANGED",
            Self::DataReceived { .. } => "DATA_RECEIVED",
            Self::TrackStreamStateChanged { .. } => "TRACK_STREAM_STATE_CHANGED",
            Self::TrackSubscriptionPermissionChanged { .. } => {
                "TRACK_SUBSCRIPTION_PERMISSION_CHANGED"
            }
            Self::TrackSubscriptionStatusChanged { .. } => "TRACK_SUBSCRIPTION_STATUS_CHANGED",
        }
    }

    fn translate(ctx: &Arc<Context>, event: &rtc::ParticipantEvent) -> FacadeResult<Self> {
        let publication = |publication: &Arc<dyn rtc::TrackPublication>| {
            TrackPublication::wrap_any(ctx, publication)
        };

        Ok(match event {
            rtc::ParticipantEvent::TrackPublished(p) => Self::TrackPublished(publication(p)?),
            rtc::ParticipantEvent::TrackUnpublished(p) => Self::TrackUnpublished(publication(p)?),
            rtc::ParticipantEvent::TrackSubscribed { track, publication: p } => {
                Self::TrackSubscribed {
                    track: Track::wrap_any(ctx, track)?,
                    publication: publication(p)?,
                }
            }
            rtc::ParticipantEvent::TrackUnsubscribed { track, publication: p } => {
                Self::TrackUnsubscribed {
                    track: Track::wrap_any(ctx, track)?,
                    publication: publication(p)?,
                }
            }
            rtc::ParticipantEvent::TrackSubscriptionFailed { track_sid, error } => {
                Self::TrackSubscriptionFailed {
                    track_sid: track_sid.clone(),
                    error: error.map(Into::into),
                }
            }
            rtc::ParticipantEvent::TrackMuted(p) => Self::TrackMuted(publication(p)?),
            rtc::ParticipantEvent::TrackUnmuted(p) => Self::TrackUnmuted(publication(p)?),
            rtc::ParticipantEvent::LocalTrackPublished(p) => {
                Self::LocalTrackPublished(publication(p)?)
            }
            rtc::ParticipantEvent::LocalTrackUnpublished(p) => {
                Self::LocalTrackUnpublished(publication(p)?)
            }
            rtc::ParticipantEvent::MetadataChanged { previous } => {
                Self::MetadataChanged { previous: previous.clone() }
            }
            rtc::ParticipantEvent::NameChanged(name) => Self::NameChanged(name.clone()),
            rtc::ParticipantEvent::AttributesChanged(changed) => {
                Self::AttributesChanged(changed.clone())
            }
            rtc::ParticipantEvent::IsSpeakingChanged(speaking) => {
                Self::IsSpeakingChanged(*speaking)
            }
            rtc::ParticipantEvent::ConnectionQualityChanged(quality) => {
                Self::ConnectionQualityChanged((*quality).into())
            }
            rtc::ParticipantEvent::EncryptionStatusChanged(encrypted) => {
                Self::EncryptionStatusChanged(*encrypted)
            }
            rtc::ParticipantEvent::DataReceived { payload, kind, topic } => Self::DataReceived {
                payload: payload.clone(),
                kind: (*kind).into(),
                topic: topic.clone(),
            },
            rtc::ParticipantEvent::TrackStreamStateChanged { publication: p, state } => {
                Self::TrackStreamStateChanged {
                    publication: publication(p)?,
                    state: (*state).into(),
                }
            }
            rtc::ParticipantEvent::TrackSubscriptionPermissionChanged {
                publication: p,
                status,
            } => Self::TrackSubscriptionPermissionChanged {
                publication: publication(p)?,
                status: (*status).into(),
            },
            rtc::ParticipantEvent::TrackSubscriptionStatusChanged { publication: p, status } => {
                Self::TrackSubscriptionStatusChanged {
                    publication: publication(p)?,
                    status: (*status).into(),
                }
            }
        })
    }
}

impl FacadeEvent for ParticipantEvent {
    fn name(&self) -> &'static str {
        ParticipantEvent::name(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Participant {
    Local(LocalParticipant),
    Remote(RemoteParticipant),
}

impl Participant {
    enum_dispatch!(
        [Local, Remote];
        pub fn object_id(self: &Self) -> ObjectId;
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
        pub fn track_publications(self: &Self) -> FacadeResult<Vec<TrackPublication>>;
        pub fn track_publication(self: &Self, sid: &TrackSid)
            -> FacadeResult<Option<TrackPublication>>;
        pub fn track_publication_by_source(self: &Self, source: TrackSource)
            -> FacadeResult<Option<TrackPublication>>;
        pub fn subscribe(self: &Self) -> mpsc::UnboundedReceiver<ParticipantEvent>;
    );

    /// Returns the facade of `participant`, creating it on first use.
    pub(crate) fn wrap(
        ctx: &Arc<Context>,
        participant: rtc::ParticipantVariant,
    ) -> FacadeResult<Self> {
        ctx.ensure_ready()?;

        let id = participant.object_id();
        let inner = ctx.participants.get_or_try_insert_with(id, || -> FacadeResult<_> {
            let class = dispatch::classify_participant(&participant)?;
            log::debug!("wrapping {} ({}) as {:?}", participant.class_name(), id, class);
            Ok(Arc::new(ParticipantInner {
                ctx: ctx.clone(),
                id,
                class,
                instance: participant.clone(),
                dispatcher: Default::default(),
                bridge: Default::default(),
            }))
        })?;

        inner.attach();
        Ok(Self::from_inner(inner))
    }

    pub(crate) fn wrap_any(
        ctx: &Arc<Context>,
        participant: &Arc<dyn rtc::Participant>,
    ) -> FacadeResult<Self> {
        Self::wrap(ctx, participant.clone().variant())
    }

    fn from_inner(inner: Arc<ParticipantInner>) -> Self {
        match inner.class {
            ParticipantClass::Local => Self::Local(LocalParticipant::from_inner(inner)),
            ParticipantClass::Remote => Self::Remote(RemoteParticipant::from_inner(inner)),
        }
    }

    pub(crate) fn inner(&self) -> &Arc<ParticipantInner> {
        match self {
            Self::Local(participant) => &participant.inner,
            Self::Remote(participant) => &participant.inner,
        }
    }

    fn unexpected(&self, expected: &'static str) -> ClassificationError {
        let inner = self.inner();
        ClassificationError::UnexpectedVariant {
            id: inner.id,
            class_name: inner.instance.class_name(),
            expected,
        }
    }
}

impl From<LocalParticipant> for Participant {
    fn from(participant: LocalParticipant) -> Self {
        Self::Local(participant)
    }
}

impl From<RemoteParticipant> for Participant {
    fn from(participant: RemoteParticipant) -> Self {
        Self::Remote(participant)
    }
}

impl TryFrom<Participant> for LocalParticipant {
    type Error = ClassificationError;

    fn try_from(participant: Participant) -> Result<Self, Self::Error> {
        match participant {
            Participant::Local(participant) => Ok(participant),
            other => Err(other.unexpected("local participant")),
        }
    }
}

impl TryFrom<Participant> for RemoteParticipant {
    type Error = ClassificationError;

    fn try_from(participant: Participant) -> Result<Self, Self::Error> {
        match participant {
            Participant::Remote(participant) => Ok(participant),
            other => Err(other.unexpected("remote participant")),
        }
    }
}

pub(crate) struct ParticipantInner {
    ctx: Arc<Context>,
    id: ObjectId,
    class: ParticipantClass,
    instance: rtc::ParticipantVariant,
    dispatcher: Dispatcher<ParticipantEvent>,
    bridge: Bridge,
}

impl ParticipantInner {
    fn local(&self) -> &Arc<dyn rtc::LocalParticipant> {
        match &self.instance {
            rtc::ParticipantVariant::Local(participant) => participant,
            rtc::ParticipantVariant::Remote(_) => unreachable!(),
        }
    }

    fn remote(&self) -> &Arc<dyn rtc::RemoteParticipant> {
        match &self.instance {
            rtc::ParticipantVariant::Remote(participant) => participant,
            rtc::ParticipantVariant::Local(_) => unreachable!(),
        }
    }

    /// The listener keeps this facade alive until the bridge is detached.
    fn attach(self: &Arc<Self>) {
        let inner = self.clone();
        let attached = self.bridge.attach(|| {
            self.instance.add_listener(Arc::new(move |event| {
                let translated = ParticipantEvent::translate(&inner.ctx, event);
                let origin = ("participant", inner.id);
                bridge::forward(&inner.ctx, origin, translated, &inner.dispatcher);
            }))
        });

        if attached {
            log::debug!("participant {} attached", self.id);
        }
    }

    /// Called once the participant left the room.
    pub(crate) fn teardown(&self) {
        if self.bridge.detach(|id| self.instance.remove_listener(id)) {
            log::debug!("participant {} detached", self.id);
        }
    }

    pub(crate) fn close(&self) {
        self.teardown();
        self.dispatcher.clear();
    }
}

impl Drop for ParticipantInner {
    fn drop(&mut self) {
        self.ctx.participants.purge(self.id);
    }
}
