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

use tandem_rtc::{self as rtc, ObjectId, TrackSid};
use tandem_utils::{enum_dispatch, observer::Dispatcher};
use tokio::sync::mpsc;

use crate::{
    bridge::{self, Bridge, FacadeEvent},
    context::Context,
    dispatch::{self, TrackClass},
    enums::{StreamState, TrackKind, TrackSource},
    error::{ClassificationError, FacadeResult},
    options::TrackDimensions,
};

macro_rules! track_methods {
    () => {
        pub fn sid(&self) -> Option<TrackSid> {
            self.inner.instance.sid()
        }

        pub fn name(&self) -> String {
            self.inner.instance.name()
        }

        pub fn kind(&self) -> TrackKind {
            $crate::translate::known_track_kind(self.inner.instance.kind())
        }

        pub fn source(&self) -> TrackSource {
            self.inner.instance.source().into()
        }

        pub fn is_muted(&self) -> bool {
            self.inner.instance.is_muted()
        }

        pub fn is_local(&self) -> bool {
            self.inner.class.is_local()
        }

        pub fn stream_state(&self) -> StreamState {
            self.inner.instance.stream_state().into()
        }

        pub fn media_stream_track_id(&self) -> String {
            self.inner.instance.media_stream_track_id()
        }

        pub fn dimensions(&self) -> Option<TrackDimensions> {
            self.inner.instance.dimensions()
        }

        pub fn stop(&self) {
            self.inner.instance.stop()
        }

        pub fn subscribe(&self) -> mpsc::UnboundedReceiver<TrackEvent> {
            self.inner.dispatcher.register()
        }
    };
}

macro_rules! local_track_methods {
    () => {
        pub async fn mute(&self) -> FacadeResult<()> {
            Ok(self.inner.local().mute().await?)
        }

        pub async fn unmute(&self) -> FacadeResult<()> {
            Ok(self.inner.local().unmute().await?)
        }

        pub fn device_id(&self) -> Option<String> {
            self.inner.local().device_id()
        }

        /// Switches the capture device, returns false if the device did not change.
        pub async fn set_device_id(&self, device_id: &str) -> FacadeResult<bool> {
            Ok(self.inner.local().set_device_id(device_id).await?)
        }

        pub async fn pause_upstream(&self) -> FacadeResult<()> {
            Ok(self.inner.local().pause_upstream().await?)
        }

        pub async fn resume_upstream(&self) -> FacadeResult<()> {
            Ok(self.inner.local().resume_upstream().await?)
        }

        pub fn is_upstream_paused(&self) -> bool {
            self.inner.local().is_upstream_paused()
        }

        pub async fn sender_stats(&self) -> FacadeResult<Vec<SenderStats>> {
            let stats = self.inner.local().sender_stats().await?;
            Ok(stats.into_iter().map(Into::into).collect())
        }

        pub(crate) fn upstream(&self) -> Arc<dyn rtc::LocalTrack> {
            self.inner.local().clone()
        }
    };
}

macro_rules! remote_track_methods {
    () => {
        pub fn playout_delay(&self) -> Option<f64> {
            self.inner.remote().playout_delay()
        }

        pub fn set_playout_delay(&self, delay: f64) {
            self.inner.remote().set_playout_delay(delay)
        }

        pub fn is_adaptive_stream(&self) -> bool {
            self.inner.remote().is_adaptive_stream()
        }

        pub async fn receiver_stats(&self) -> FacadeResult<Option<ReceiverStats>> {
            Ok(self.inner.remote().receiver_stats().await?.map(Into::into))
        }
    };
}

mod local_audio_track;
mod local_track;
mod local_video_track;
mod remote_audio_track;
mod remote_track;
mod remote_video_track;

pub use local_audio_track::*;
pub use local_track::*;
pub use local_video_track::*;
pub use remote_audio_track::*;
pub use remote_track::*;
pub use remote_video_track::*;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackEvent {
    Muted,
    Unmuted,
    Ended,
    Restarted,
    UpstreamPaused,
    UpstreamResumed,
    StreamStateChanged(StreamState),
    VideoDimensionsChanged(TrackDimensions),
    AudioSilenceDetected,
}

impl TrackEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Muted => "MUTED",
            Self::Unmuted => "UNMUTED",
            Self::Ended => "ENDED",
            Self::Restarted => "RESTARTED",
            Self::UpstreamPaused => "UPSTREAM_PAUSED",
            Self::UpstreamResumed => "UPSTREAM_RESUMED",
            Self::StreamStateChanged(_) => "STREAM_STATE_CHANGED",
            Self::VideoDimensionsChanged(_) => "VIDEO_DIMENSIONS_CHANGED",
            Self::AudioSilenceDetected => "AUDIO_SILENCE_DETECTED",
        }
    }
}

impl FacadeEvent for TrackEvent {
    fn name(&self) -> &'static str {
        TrackEvent::name(self)
    }
}

impl From<&rtc::TrackEvent> for TrackEvent {
    fn from(event: &rtc::TrackEvent) -> Self {
        match event {
            rtc::TrackEvent::Muted => Self::Muted,
            rtc::TrackEvent::Unmuted => Self::Unmuted,
            rtc::TrackEvent::Ended => Self::Ended,
            rtc::TrackEvent::Restarted => Self::Restarted,
            rtc::TrackEvent::UpstreamPaused => Self::UpstreamPaused,
            rtc::TrackEvent::UpstreamResumed => Self::UpstreamResumed,
            rtc::TrackEvent::StreamStateChanged(state) => Self::StreamStateChanged((*state).into()),
            rtc::TrackEvent::VideoDimensionsChanged(dimensions) => {
                Self::VideoDimensionsChanged(*dimensions)
            }
            rtc::TrackEvent::AudioSilenceDetected => Self::AudioSilenceDetected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Track {
    LocalAudio(LocalAudioTrack),
    LocalVideo(LocalVideoTrack),
    RemoteAudio(RemoteAudioTrack),
    RemoteVideo(RemoteVideoTrack),
}

macro_rules! track_dispatch {
    ([$($variant:ident),+]) => {
        enum_dispatch!(
            [$($variant),+];
            pub fn object_id(self: &Self) -> ObjectId;
            pub fn sid(self: &Self) -> Option<TrackSid>;
            pub fn name(self: &Self) -> String;
            pub fn kind(self: &Self) -> TrackKind;
            pub fn source(self: &Self) -> TrackSource;
            pub fn is_muted(self: &Self) -> bool;
            pub fn is_local(self: &Self) -> bool;
            pub fn stream_state(self: &Self) -> StreamState;
            pub fn media_stream_track_id(self: &Self) -> String;
            pub fn dimensions(self: &Self) -> Option<TrackDimensions>;
            pub fn stop(self: &Self);
            pub fn subscribe(self: &Self) -> mpsc::UnboundedReceiver<TrackEvent>;
        );
    };
}

pub(crate) use track_dispatch;

impl Track {
    track_dispatch!([LocalAudio, LocalVideo, RemoteAudio, RemoteVideo]);

    /// Returns the facade of `track`, creating it on first use.
    pub(crate) fn wrap(ctx: &Arc<Context>, track: rtc::TrackVariant) -> FacadeResult<Self> {
        ctx.ensure_ready()?;

        let id = track.object_id();
        let inner = ctx.tracks.get_or_try_insert_with(id, || -> FacadeResult<_> {
            let class = dispatch::classify_track(&track)?;
            log::debug!("wrapping {} ({}) as {:?}", track.class_name(), id, class);
            Ok(Arc::new(TrackInner {
                ctx: ctx.clone(),
                id,
                class,
                instance: track.clone(),
                dispatcher: Default::default(),
                bridge: Default::default(),
            }))
        })?;

        inner.attach();
        Ok(Self::from_inner(inner))
    }

    pub(crate) fn wrap_any(ctx: &Arc<Context>, track: &Arc<dyn rtc::Track>) -> FacadeResult<Self> {
        Self::wrap(ctx, track.clone().variant())
    }

    fn from_inner(inner: Arc<TrackInner>) -> Self {
        match inner.class {
            TrackClass::LocalAudio => Self::LocalAudio(LocalAudioTrack::from_inner(inner)),
            TrackClass::LocalVideo => Self::LocalVideo(LocalVideoTrack::from_inner(inner)),
            TrackClass::RemoteAudio => Self::RemoteAudio(RemoteAudioTrack::from_inner(inner)),
            TrackClass::RemoteVideo => Self::RemoteVideo(RemoteVideoTrack::from_inner(inner)),
        }
    }

    fn inner(&self) -> &Arc<TrackInner> {
        match self {
            Self::LocalAudio(track) => &track.inner,
            Self::LocalVideo(track) => &track.inner,
            Self::RemoteAudio(track) => &track.inner,
            Self::RemoteVideo(track) => &track.inner,
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

impl From<LocalTrack> for Track {
    fn from(track: LocalTrack) -> Self {
        match track {
            LocalTrack::Audio(track) => Self::LocalAudio(track),
            LocalTrack::Video(track) => Self::LocalVideo(track),
        }
    }
}

impl From<RemoteTrack> for Track {
    fn from(track: RemoteTrack) -> Self {
        match track {
            RemoteTrack::Audio(track) => Self::RemoteAudio(track),
            RemoteTrack::Video(track) => Self::RemoteVideo(track),
        }
    }
}

impl TryFrom<Track> for LocalTrack {
    type Error = ClassificationError;

    fn try_from(track: Track) -> Result<Self, Self::Error> {
        match track {
            Track::LocalAudio(track) => Ok(Self::Audio(track)),
            Track::LocalVideo(track) => Ok(Self::Video(track)),
            other => Err(other.unexpected("local track")),
        }
    }
}

impl TryFrom<Track> for RemoteTrack {
    type Error = ClassificationError;

    fn try_from(track: Track) -> Result<Self, Self::Error> {
        match track {
            Track::RemoteAudio(track) => Ok(Self::Audio(track)),
            Track::RemoteVideo(track) => Ok(Self::Video(track)),
            other => Err(other.unexpected("remote track")),
        }
    }
}

pub(crate) struct TrackInner {
    ctx: Arc<Context>,
    id: ObjectId,
    class: TrackClass,
    instance: rtc::TrackVariant,
    dispatcher: Dispatcher<TrackEvent>,
    bridge: Bridge,
}

impl TrackInner {
    fn local(&self) -> &Arc<dyn rtc::LocalTrack> {
        match &self.instance {
            rtc::TrackVariant::Local(track) => track,
            rtc::TrackVariant::Remote(_) => unreachable!(),
        }
    }

    fn remote(&self) -> &Arc<dyn rtc::RemoteTrack> {
        match &self.instance {
            rtc::TrackVariant::Remote(track) => track,
            rtc::TrackVariant::Local(_) => unreachable!(),
        }
    }

    /// The listener keeps this facade alive until the bridge is detached.
    fn listener(self: &Arc<Self>) -> rtc::Listener<rtc::TrackEvent> {
        let inner = self.clone();
        Arc::new(move |event| inner.on_event(event))
    }

    fn attach(self: &Arc<Self>) {
        if self.bridge.attach(|| self.instance.add_listener(self.listener())) {
            log::debug!("track {} attached", self.id);
        }
    }

    /// Attaches again after the track ended, e.g. when its capture restarts.
    fn reattach(self: &Arc<Self>) -> FacadeResult<()> {
        self.ctx.ensure_ready()?;
        if self.bridge.reattach(|| self.instance.add_listener(self.listener())) {
            log::debug!("track {} reattached", self.id);
        }
        Ok(())
    }

    fn on_event(&self, event: &rtc::TrackEvent) {
        bridge::forward(&self.ctx, ("track", self.id), Ok(event.into()), &self.dispatcher);

        if let rtc::TrackEvent::Ended = event {
            self.teardown();
        }
    }

    fn teardown(&self) {
        if self.bridge.detach(|id| self.instance.remove_listener(id)) {
            log::debug!("track {} detached", self.id);
        }
    }

    pub(crate) fn close(&self) {
        self.teardown();
        self.dispatcher.clear();
    }
}

impl Drop for TrackInner {
    fn drop(&mut self) {
        self.ctx.tracks.purge(self.id);
    }
}
