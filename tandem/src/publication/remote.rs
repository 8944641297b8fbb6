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
    options::TrackDimensions,
    track::{RemoteTrack, Track},
};

facade_handle!(RemoteTrackPublication => PublicationInner);

impl RemoteTrackPublication {
    publication_methods!();

    /// Derived from the client on every call.
    pub fn subscription_status(&self) -> SubscriptionStatus {
        self.inner.remote().subscription_status().into()
    }

    pub fn permission_status(&self) -> PermissionStatus {
        self.inner.remote().permission_status().into()
    }

    pub fn is_desired(&self) -> bool {
        self.inner.remote().is_desired()
    }

    pub fn set_subscribed(&self, subscribed: bool) {
        self.inner.remote().set_subscribed(subscribed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.inner.remote().set_enabled(enabled)
    }

    pub fn video_quality(&self) -> Option<VideoQuality> {
        self.inner.remote().video_quality().map(Into::into)
    }

    pub fn set_video_quality(&self, quality: VideoQuality) {
        self.inner.remote().set_video_quality(quality.into())
    }

    pub fn set_video_dimensions(&self, dimensions: TrackDimensions) {
        self.inner.remote().set_video_dimensions(dimensions)
    }

    pub fn set_video_fps(&self, fps: f64) {
        self.inner.remote().set_video_fps(fps)
    }

    pub fn remote_track(&self) -> FacadeResult<Option<RemoteTrack>> {
        self.inner
            .remote()
            .remote_track()
            .map(|track| RemoteTrack::wrap(&self.inner.ctx, track))
            .transpose()
    }

    pub(crate) fn wrap(
        ctx: &Arc<Context>,
        publication: Arc<dyn rtc::RemoteTrackPublication>,
    ) -> FacadeResult<Self> {
        let variant = rtc::PublicationVariant::Remote(publication);
        Ok(TrackPublication::wrap(ctx, variant)?.try_into()?)
    }
}
