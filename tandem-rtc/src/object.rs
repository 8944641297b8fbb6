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

use std::{fmt, sync::Arc};

use crate::{
    id::ObjectId,
    participant::{LocalParticipant, Participant, RemoteParticipant},
    publication::{LocalTrackPublication, RemoteTrackPublication, TrackPublication},
    room::Room,
    track::{LocalTrack, RemoteTrack, Track},
};

/// Implemented by every object the client hands out.
pub trait RtcHandle: Send + Sync {
    /// Stable identity of this object, unique for the whole process.
    fn object_id(&self) -> ObjectId;

    /// Name of the client-side runtime type, e.g. `RemoteAudioTrack`.
    fn class_name(&self) -> &'static str;
}

/// Any object handed out by the client, tagged with its category.
#[derive(Clone, Debug)]
pub enum RtcObject {
    Room(Arc<dyn Room>),
    Participant(Arc<dyn Participant>),
    Track(Arc<dyn Track>),
    Publication(Arc<dyn TrackPublication>),
    /// Objects outside of the room/participant/track/publication categories
    /// (devices, stream readers, ...)
    Other(Arc<dyn RtcHandle>),
}

impl RtcObject {
    pub fn object_id(&self) -> ObjectId {
        match self {
            Self::Room(room) => room.object_id(),
            Self::Participant(participant) => participant.object_id(),
            Self::Track(track) => track.object_id(),
            Self::Publication(publication) => publication.object_id(),
            Self::Other(handle) => handle.object_id(),
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Room(room) => room.class_name(),
            Self::Participant(participant) => participant.class_name(),
            Self::Track(track) => track.class_name(),
            Self::Publication(publication) => publication.class_name(),
            Self::Other(handle) => handle.class_name(),
        }
    }
}

macro_rules! debug_handle {
    ($($handle:ident),+) => {
        $(
            impl fmt::Debug for dyn $handle {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(self.class_name()).field("id", &self.object_id()).finish()
                }
            }
        )+
    };
}

debug_handle!(
    RtcHandle,
    Room,
    Participant,
    LocalParticipant,
    RemoteParticipant,
    Track,
    LocalTrack,
    RemoteTrack,
    TrackPublication,
    LocalTrackPublication,
    RemoteTrackPublication
);
