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

use super::{TrackEvent, TrackInner};
use crate::{
    enums::{StreamState, TrackKind, TrackSource, VideoCodec, VideoQuality},
    error::FacadeResult,
    options::{TrackDimensions, VideoCaptureOptions, VideoEncoding},
    stats::SenderStats,
};

facade_handle!(LocalVideoTrack => TrackInner);

impl LocalVideoTrack {
    track_methods!();
    local_track_methods!();

    /// Restarts the capture, optionally with new options.
    pub async fn restart(&self, options: Option<VideoCaptureOptions>) -> FacadeResult<()> {
        self.inner.reattach()?;
        let options = options.map(|options| rtc::TrackCaptureOptions::Video(options.into()));
        Ok(self.inner.local().restart(options).await?)
    }

    /// Restricts the highest simulcast layer sent for this track.
    pub fn set_publishing_quality(&self, quality: VideoQuality) -> FacadeResult<()> {
        Ok(self.inner.local().set_publishing_quality(quality.into())?)
    }

    pub async fn add_simulcast_layer(
        &self,
        codec: VideoCodec,
        encoding: VideoEncoding,
    ) -> FacadeResult<()> {
        Ok(self.inner.local().add_simulcast_layer(codec.into(), encoding).await?)
    }
}
