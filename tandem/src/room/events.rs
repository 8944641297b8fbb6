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

use tandem_rtc::{self as rtc, TrackSid};

use crate::{
    bridge::FacadeEvent,
    context::Context,
    enums::*,
    error::FacadeResult,
    participant::{LocalParticipant, Participant, RemoteParticipant},
    publication::{LocalTrackPublication, RemoteTrackPublication, TrackPublication},
    track::{RemoteTrack, Track},
};

/// Events of a [`Room`](super::Room).
///
/// Events that can only concern remote participants carry the remote types,
/// the `Local*` events carry the local ones.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    Connected,
    Reconnecting,
    SignalReconnecting,
    Reconnected,
    Disconnected {
        reason: Option<DisconnectReason>,
    },
    ConnectionStateChanged(ConnectionState),
    ParticipantConnected(RemoteParticipant),
    ParticipantDisconnected(RemoteParticipant),
    TrackPublished {
        publication: RemoteTrackPublication,
        participant: RemoteParticipant,
    },
    TrackUnpublished {
        publication: RemoteTrackPublication,
        participant: RemoteParticipant,
    },
    TrackSubscribed {
        track: RemoteTrack,
        publication: RemoteTrackPublication,
        participant: RemoteParticipant,
    },
    TrackUnsubscribed {
        track: RemoteTrack,
        publication: RemoteTrackPublication,
        participant: RemoteParticipant,
    },
    TrackSubscriptionFailed {
        track_sid: TrackSid,
        participant: RemoteParticipant,
        error: Option<SubscriptionError>,
    },
    TrackMuted {
        publication: TrackPublication,
        participant: Participant,
    },
    TrackUnmuted {
        publication: TrackPublication,
        participant: Participant,
    },
    LocalTrackPublished {
        publication: LocalTrackPublication,
        participant: LocalParticipant,
    },
    LocalTrackUnpublished {
        publication: LocalTrackPublication,
        participant: LocalParticipant,
    },
    LocalAudioSilenceDetected(LocalTrackPublication),
    ActiveSpeakersChanged(Vec<Participant>),
    RoomMetadataChanged(String),
    ParticipantMetadataChanged {
        previous: Option<String>,
        participant: Participant,
    },
    ParticipantNameChanged {
        name: String,
        participant: Participant,
    },
    ParticipantAttributesChanged {
        changed: HashMap<String, String>,
        participant: Participant,
    },
    ParticipantEncryptionStatusChanged {
        encrypted: bool,
        participant: Option<Participant>,
    },
    ConnectionQualityChanged {
        quality: ConnectionQuality,
        participant: Participant,
    },
    DataReceived {
        payload: Arc<Vec<u8>>,
        participant: Option<RemoteParticipant>,
        kind: DataPacketKind,
        topic: Option<String>,
    },
    TrackStreamStateChanged {
        publication: RemoteTrackPublication,
        state: StreamState,
        participant: RemoteParticipant,
    },
    TrackSubscriptionPermissionChanged {
        publication: RemoteTrackPublication,
        status: PermissionStatus,
        participant: RemoteParticipant,
    },
    TrackSubscriptionStatusChanged {
        publication: RemoteTrackPublication,
        status: SubscriptionStatus,
        participant: RemoteParticipant,
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

impl RoomEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected => "CONNECTED",
            Self::Reconnecting => "RECONNECTING",
            Self::SignalReconnecting => "SIGNAL_RECONNECTING",
            Self::Reconnected => "RECONNECTED",
            Self::Disconnected { .. } => "DISCONNECTED",
            Self::ConnectionStateChanged(_) => "CONNECTION_STATE_CHANGED",
            Self::ParticipantConnected(_) => "PARTICIPANT_CONNECTED",
            Self::ParticipantDisconnected(_) => "PARTICIPANT_DISCONNECTED",
            Self::TrackPublished { .. } => "TRACK_PUBLISHED",
            Self::TrackUnpublished { .. } => "TRACK_UNPUBLISHED",
            Self::TrackSubscribed { .. } => "TRACK_SUBSCRIBED",
            Self::TrackUnsubscribed { .. } => "TRACK_UNSUBSCRIBED",
            Self::TrackSubscriptionFailed { .. } => "TRACK_SUBSCRIPTION_FAILED",
            Self::TrackMuted { .. } => "TRACK_MUTED",
            Self::TrackUnmuted { .. } => "TRACK_UNMUTED",
            Self::LocalTrackPublished { .. } => "LOCAL_TRACK_PUBLISHED",
            Self::LocalTrackUnpublished { .. } => "LOCAL_TRACK_UNPUBLISHED",
            Self::LocalAudioSilenceDetected(_) => "LOCAL_AUDIO_SILENCE_DETECTED",
            Self::ActiveSpeakersChanged(_) => "ACTIVE_SPEAKERS_CHANGED",
            Self::RoomMetadataChanged(_) => "ROOM_METADATA_CHANGED",
            Self::ParticipantMetadataChanged { .. } => "PARTICIPANT_METADATA_CHANGED",
            Self::ParticipantNameChanged { .. } => "PARTICIPANT_NAME_CHANGED",
            Self::ParticipantAttributesChanged { .. } => "PARTICIPANT_ATTRIBUTES_CHANGED",
            Self::ParticipantEncryptionStatusChanged { .. } => {
                "PARTICIPANT_ENCRYPTION_STATUS_CHANGED"
            }
            Self::ConnectionQualityChanged { .. } => "CONNECTION_QUALITY_CHANGED",
            Self::DataReceived { .. } => "DATA_RECEIVED",
            Self::TrackStreamStateChanged { .. } => "TRACK_STREAM_STATE_CHANGED",
            Self::TrackSubscriptionPermissionChanged { .. } => {
                "TRACK_SUBSCRIPTION_PERMISSION_CHANGED"
            }
            Self::TrackSubscriptionStatusChanged { .. } => "TRACK_SUBSCRIPTION_STATUS_CHANGED",
            Self::AudioPlaybackStatusChanged(_) => "AUDIO_PLAYBACK_STATUS_CHANGED",
            Self::MediaDevicesChanged => "MEDIA_DEVICES_CHANGED",
            Self::MediaDevicesError(_) => "MEDIA_DEVICES_ERROR",
            Self::ActiveDeviceChanged { .. } => "ACTIVE_DEVICE_CHANGED",
            Self::RecordingStatusChanged(_) => "RECORDING_STATUS_CHANGED",
            Self::EncryptionError(_) => "ENCRYPTION_ERROR",
        }
    }

    pub(super) fn translate(ctx: &Arc<Context>, event: &rtc::RoomEvent) -> FacadeResult<Self> {
        let participant = |p: &Arc<dyn rtc::Participant>| Participant::wrap_any(ctx, p);
        let remote_participant = |p: &Arc<dyn rtc::Participant>| -> FacadeResult<_> {
            Ok(RemoteParticipant::try_from(Participant::wrap_any(ctx, p)?)?)
        };
        let local_participant = |p: &Arc<dyn rtc::Participant>| -> FacadeResult<_> {
            Ok(LocalParticipant::try_from(Participant::wrap_any(ctx, p)?)?)
        };
        let publication = |p: &Arc<dyn rtc::TrackPublication>| TrackPublication::wrap_any(ctx, p);
        let remote_publication = |p: &Arc<dyn rtc::TrackPublication>| -> FacadeResult<_> {
            Ok(RemoteTrackPublication::try_from(TrackPublication::wrap_any(ctx, p)?)?)
        };
        let local_publication = |p: &Arc<dyn rtc::TrackPublication>| -> FacadeResult<_> {
            Ok(LocalTrackPublication::try_from(TrackPublication::wrap_any(ctx, p)?)?)
        };
        let remote_track = |t: &Arc<dyn rtc::Track>| -> FacadeResult<_> {
            Ok(RemoteTrack::try_from(Track::wrap_any(ctx, t)?)?)
        };

        use rtc::RoomEvent as E;
        Ok(match event {
            E::Connected => Self::Connected,
            E::Reconnecting => Self::Reconnecting,
            E::SignalReconnecting => Self::SignalReconnecting,
            E::Reconnected => Self::Reconnected,
            E::Disconnected { reason } => Self::Disconnected { reason: reason.map(Into::into) },
            E::ConnectionStateChanged(state) => Self::ConnectionStateChanged((*state).into()),
            E::ParticipantConnected(p) => Self::ParticipantConnected(remote_participant(p)?),
            E::ParticipantDisconnected(p) => Self::ParticipantDisconnected(remote_participant(p)?),
            E::TrackPublished { publication: pb, participant: p } => Self::TrackPublished {
                publication: remote_publication(pb)?,
                participant: remote_participant(p)?,
            },
            E::TrackUnpublished { publication: pb, participant: p } => Self::TrackUnpublished {
                publication: remote_publication(pb)?,
                participant: remote_participant(p)?,
            },
            E::TrackSubscribed { track, publication: pb, participant: p } => {
                Self::TrackSubscribed {
                    track: remote_track(track)?,
                    publication: remote_publication(pb)?,
                    participant: remote_participant(p)?,
                }
            }
            E::TrackUnsubscribed { track, publication: pb, participant: p } => {
                Self::TrackUnsubscribed {
                    track: remote_track(track)?,
                    publication: remote_publication(pb)?,
                    participant: remote_participant(p)?,
                }
            }
            E::TrackSubscriptionFailed { track_sid, participant: p, error } => {
                Self::TrackSubscriptionFailed {
                    track_sid: track_sid.clone(),
                    participant: remote_participant(p)?,
                    error: error.map(Into::into),
                }
            }
            E::TrackMuted { publication: pb, participant: p } => Self::TrackMuted {
                publication: publication(pb)?,
                participant: participant(p)?,
            },
            E::TrackUnmuted { publication: pb, participant: p } => Self::TrackUnmuted {
                publication: publication(pb)?,
                participant: participant(p)?,
            },
            E::LocalTrackPublished { publication: pb, participant: p } => {
                Self::LocalTrackPublished {
                    publication: local_publication(pb)?,
                    participant: local_participant(p)?,
                }
            }
            E::LocalTrackUnpublished { publication: pb, participant: p } => {
                Self::LocalTrackUnpublished {
                    publication: local_publication(pb)?,
                    participant: local_participant(p)?,
                }
            }
            E::LocalAudioSilenceDetected(pb) => {
                Self::LocalAudioSilenceDetected(local_publication(pb)?)
            }
            E::ActiveSpeakersChanged(speakers) => Self::ActiveSpeakersChanged(
                speakers.iter().map(participant).collect::<FacadeResult<_>>()?,
            ),
            E::RoomMetadataChanged(metadata) => Self::RoomMetadataChanged(metadata.clone()),
            E::ParticipantMetadataChanged { previous, participant: p } => {
                Self::ParticipantMetadataChanged {
                    previous: previous.clone(),
                    participant: participant(p)?,
                }
            }
            E::ParticipantNameChanged { name, participant: p } => {
                Self::ParticipantNameChanged { name: name.clone(), participant: participant(p)? }
            }
            E::ParticipantAttributesChanged { changed, participant: p } => {
                Self::ParticipantAttributesChanged {
                    changed: changed.clone(),
                    participant: participant(p)?,
                }
            }
            E::ParticipantEncryptionStatusChanged { encrypted, participant: p } => {
                Self::ParticipantEncryptionStatusChanged {
                    encrypted: *encrypted,
                    participant: p.as_ref().map(participant).transpose()?,
                }
            }
            E::ConnectionQualityChanged { quality, participant: p } => {
                Self::ConnectionQualityChanged {
                    quality: (*quality).into(),
                    participant: participant(p)?,
                }
            }
            E::DataReceived { payload, participant: p, kind, topic } => Self::DataReceived {
                payload: payload.clone(),
                participant: p.as_ref().map(remote_participant).transpose()?,
                kind: (*kind).into(),
                topic: topic.clone(),
            },
            E::TrackStreamStateChanged { publication: pb, state, participant: p } => {
                Self::TrackStreamStateChanged {
                    publication: remote_publication(pb)?,
                    state: (*state).into(),
                    participant: remote_participant(p)?,
                }
            }
            E::TrackSubscriptionPermissionChanged { publication: pb, status, participant: p } => {
                Self::TrackSubscriptionPermissionChanged {
                    publication: remote_publication(pb)?,
                    status: (*status).into(),
                    participant: remote_participant(p)?,
                }
            }
            E::TrackSubscriptionStatusChanged { publication: pb, status, participant: p } => {
                Self::TrackSubscriptionStatusChanged {
                    publication: remote_publication(pb)?,
                    status: (*status).into(),
                    participant: remote_participant(p)?,
                }
            }
            E::AudioPlaybackStatusChanged(playing) => Self::AudioPlaybackStatusChanged(*playing),
            E::MediaDevicesChanged => Self::MediaDevicesChanged,
            E::MediaDevicesError(error) => Self::MediaDevicesError(error.clone()),
            E::ActiveDeviceChanged { kind, device_id } => Self::ActiveDeviceChanged {
                kind: (*kind).into(),
                device_id: device_id.clone(),
            },
            E::RecordingStatusChanged(recording) => Self::RecordingStatusChanged(*recording),
            E::EncryptionError(error) => Self::EncryptionError(error.clone()),
        })
    }
}

impl FacadeEvent for RoomEvent {
    fn name(&self) -> &'static str {
        RoomEvent::name(self)
    }
}
