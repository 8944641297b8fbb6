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

//! Selection of the concrete facade type of a client object.

use tandem_rtc as rtc;

use crate::error::ClassificationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParticipantClass {
    Local,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackClass {
    LocalAudio,
    LocalVideo,
    RemoteAudio,
    RemoteVideo,
}

impl TrackClass {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::LocalAudio | Self::LocalVideo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PublicationClass {
    Local,
    Remote,
}

/// Category of an arbitrary client object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Room,
    Participant,
    Track,
    Publication,
}

pub(crate) fn classify_object(object: &rtc::RtcObject) -> Result<Category, ClassificationError> {
    match object {
        rtc::RtcObject::Room(_) => Ok(Category::Room),
        rtc::RtcObject::Participant(_) => Ok(Category::Participant),
        rtc::RtcObject::Track(_) => Ok(Category::Track),
        rtc::RtcObject::Publication(_) => Ok(Category::Publication),
        rtc::RtcObject::Other(handle) => Err(ClassificationError::UnrecognizedCategory {
            id: handle.object_id(),
            class_name: handle.class_name(),
        }),
    }
}

/// Participants are classified by the local flag they report. The flag has to
/// agree with their runtime type, which the typed accessors rely on.
pub(crate) fn classify_participant(
    participant: &rtc::ParticipantVariant,
) -> Result<ParticipantClass, ClassificationError> {
    let is_local = participant.is_local();
    match (is_local, participant) {
        (true, rtc::ParticipantVariant::Local(_)) => Ok(ParticipantClass::Local),
        (false, rtc::ParticipantVariant::Remote(_)) => Ok(ParticipantClass::Remote),
        _ => Err(ClassificationError::InconsistentParticipant {
            id: participant.object_id(),
            class_name: participant.class_name(),
            is_local,
        }),
    }
}

/// Tracks are classified by runtime type first, then by kind.
pub(crate) fn classify_track(track: &rtc::TrackVariant) -> Result<TrackClass, ClassificationError> {
    match (track, track.kind()) {
        (rtc::TrackVariant::Local(_), rtc::TrackKind::Audio) => Ok(TrackClass::LocalAudio),
        (rtc::TrackVariant::Local(_), rtc::TrackKind::Video) => Ok(TrackClass::LocalVideo),
        (rtc::TrackVariant::Remote(_), rtc::TrackKind::Audio) => Ok(TrackClass::RemoteAudio),
        (rtc::TrackVariant::Remote(_), rtc::TrackKind::Video) => Ok(TrackClass::RemoteVideo),
        (_, kind @ rtc::TrackKind::Unknown) => Err(ClassificationError::UnsupportedTrackKind {
            id: track.object_id(),
            class_name: track.class_name(),
            kind: kind.as_str(),
        }),
    }
}

pub(crate) fn classify_publication(
    publication: &rtc::PublicationVariant,
) -> Result<PublicationClass, ClassificationError> {
    if let kind @ rtc::TrackKind::Unknown = publication.kind() {
        return Err(ClassificationError::UnsupportedTrackKind {
            id: publication.object_id(),
            class_name: publication.class_name(),
            kind: kind.as_str(),
        });
    }

    Ok(match publication {
        rtc::PublicationVariant::Local(_) => PublicationClass::Local,
        rtc::PublicationVariant::Remote(_) => PublicationClass::Remote,
    })
}
