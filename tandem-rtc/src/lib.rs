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

//! Object model of the real-time client wrapped by the `tandem` facade.
//!
//! Everything here is a boundary contract: rooms, participants, tracks and
//! publications are object-safe traits implemented by the client, each
//! reporting a stable [`ObjectId`] and a synchronous listener registry for its
//! events.

pub mod client;
pub mod device;
pub mod enums;
pub mod error;
pub mod id;
pub mod object;
pub mod options;
pub mod participant;
pub mod publication;
pub mod room;
pub mod stats;
pub mod track;

#[cfg(any(test, feature = "test-support"))]
pub mod test;

pub use tandem_utils::observer::{Listener, ListenerId, ListenerSet};

pub mod prelude {
    pub use crate::{
        client::RtcClient,
        device::MediaDeviceInfo,
        enums::*,
        error::{RtcError, RtcResult},
        id::*,
        object::{RtcHandle, RtcObject},
        options::*,
        participant::{
            LocalParticipant, Participant, ParticipantEvent, ParticipantVariant,
            RemoteParticipant,
        },
        publication::{
            LocalTrackPublication, PublicationEvent, PublicationVariant, RemoteTrackPublication,
            TrackPublication,
        },
        room::{Room, RoomEvent},
        stats::{ReceiverStats, SenderStats},
        track::{LocalTrack, RemoteTrack, Track, TrackEvent, TrackVariant},
        Listener, ListenerId, ListenerSet,
    };
}

pub use prelude::*;
