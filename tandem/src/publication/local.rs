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

use tandem_rtc::{self as rtc, TrackSid};
use tokio::sync::mpsc;

use super::{PublicationEvent, PublicationInner, TrackPublication};
use crate::{
    context::Context,
    dispatch::PublicationClass,
    enums::*,
    error::FacadeResult,
    options::{TrackDimensions, TrackPublishOptions},
    track::{LocalTrack, Track},
};

facade_handle!(LocalTrackPublication => PublicationInner);

impl LocalTrackPublication {
    publication_methods!();

    pub async fn mute(&self) -> FacadeResult<()> {
        Ok(self.inner.local().mute().await?)
    }

    pub async fn unmute(&self) -> FacadeResult<()> {
        Ok(self.inner.local().unmute().await?)
    }

    pub async fn pause_upstream(&self) -> FacadeResult<()> {
        Ok(self.inner.local().pause_upstream().await?)
    }

    pub async fn resume_upstream(&self) -> FacadeResult<()> {
        Ok(self.inner.local().resume_upstream().await?)
    }

    pub fn publish_options(&self) -> TrackPublishOptions {
        self.inner.local().publish_options().into()
    }

    pub fn local_track(&self) -> FacadeResult<Option<LocalTrack>> {
        self.inner
            .local()
            .local_track()
            .map(|track| LocalTrack::wrap(&self.inner.ctx, track))
            .transpose()
    }

    pub(crate) fn wrap(
        ctx: &Arc<Context>,
        publication: Arc<dyn rtc::LocalTrackPublication>,
    ) -> FacadeResult<Self> {
        let variant = rtc::PublicationVariant::Local(publication);
        Ok(TrackPublication::wrap(ctx, variant)?.try_into()?)
    }
}
