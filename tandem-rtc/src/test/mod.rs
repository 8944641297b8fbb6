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

//! Deterministic in-memory client.
//!
//! Every object behaves like its real counterpart as far as state and events
//! are concerned: changing a state emits the events a connected client would
//! emit, in the same order, synchronously on the calling thread. Nothing
//! touches the network or a media device.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::prelude::*;

mod participant;
mod track;

pub use client::MockClient;
pub use participant::{MockLocalParticipant, MockRemoteParticipant};
pub use publication::{MockLocalPublication, MockRemotePublication};
pub use room::MockRoom;
pub use track::{MockLocalTrack, MockRemoteTrack};

/// An object that belongs to none of the room categories.
#[derive(Debug)]
pub struct MockHandle {
    id: ObjectId,
    class_name: &'static str,
}

impl MockHandle {
    pub fn new(class_name: &'static str) -> Arc<Self> {
        Arc::new(Self { id: ObjectId::next(), class_name })
    }
}

impl RtcHandle for MockHandle {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn class_name(&self) -> &'static str {
        self.class_name
    }
}

pub(crate) fn next_sid(prefix: &str) -> String {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    format!("{}_{:06}", prefix, NEXT.fetch_add(1, Ordering::Relaxed))
}
