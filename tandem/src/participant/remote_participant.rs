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

use tandem_rtc::{self as rtc, ParticipantIdentity, ParticipantSid, TrackSid};
use tokio::sync::mpsc;

use super::{Participant, ParticipantEvent, ParticipantInner};
use crate::{
    context::Context,
    dispatch::ParticipantClass,
    enums::*,
    error::FacadeResult,
    publication::{RemoteTrackPublication, TrackPublication},
};

facade_handle!(RemoteParticipant => ParticipantInner);

impl RemoteParticipant {
    participant_methods!();

    /// Playback volume of the tracks of `source`, between 0 and 1.
    pub fn volume(&self, source: TrackSource) -> Option<f32> {
        self.inner.remote().volume(source.into())
    }

    pub fn set_volume(&self, volume: f32, source: TrackSource) {
        self.inner.remote().set_volume(volume, source.into())
    }

    pub fn remote_track_publications(&self) -> FacadeResult<Vec<RemoteTrackPublication>> {
        self.inner
            .remote()
            .remote_track_publications()
            .into_iter()
            .map(|publication| RemoteTrackPublication::wrap(&self.inner.ctx, publication))
            .collect()
    }

    pub(crate) fn wrap(
        ctx: &Arc<Context>,
        participant: Arc<dyn rtc::RemoteParticipant>,
    ) -> FacadeResult<Self> {
        let variant = rtc::ParticipantVariant::Remote(participant);
        Ok(Participant::wrap(ctx, variant)?.try_into()?)
    }
}
