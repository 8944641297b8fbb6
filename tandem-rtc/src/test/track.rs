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

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::next_sid;
use crate::prelude::*;

pub struct MockLocalTrack {
    id: ObjectId,
    sid: TrackSid,
    name: String,
    kind: TrackKind,
    source: TrackSource,
    muted: AtomicBool,
    stopped: AtomicBool,
    upstream_paused: AtomicBool,
    device_id: Mutex<Option<String>>,
    dimensions: Mutex<Option<TrackDimensions>>,
    publishing_quality: Mutex<Option<VideoQuality>>,
    simulcast_layers: Mutex<Vec<(VideoCodec, VideoEncoding)>>,
    listeners: ListenerSet<TrackEvent>,
}

impl MockLocalTrack {
    pub fn new(kind: TrackKind, source: TrackSource) -> Arc<Self> {
        Self::with_device(kind, source, None)
    }

    pub fn with_device(
        kind: TrackKind,
        source: TrackSource,
        device_id: Option<String>,
    ) -> Arc<Self> {
        let dimensions = match kind {
            TrackKind::Video => Some(TrackDimensions { width: 1280, height: 720 }),
            _ => None,
        };

        Arc::new(Self {
            id: ObjectId::next(),
            sid: next_sid("TR").into(),
            name: source.as_str().to_owned(),
            kind,
            source,
            muted: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
            upstream_paused: AtomicBool::new(false),
            device_id: Mutex::new(device_id),
            dimensions: Mutex::new(dimensions),
            publishing_quality: Default::default(),
            simulcast_layers: Default::default(),
            listeners: Default::default(),
        })
    }

    pub fn emit(&self, event: TrackEvent) {
        self.listeners.emit(&event);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    pub fn publishing_quality(&self) -> Option<VideoQuality> {
        *self.publishing_quality.lock()
    }

    pub fn simulcast_layers(&self) -> Vec<(VideoCodec, VideoEncoding)> {
        self.simulcast_layers.lock().clone()
    }

    fn require_video(&self, operation: &str) -> RtcResult<()> {
        if self.kind != TrackKind::Video {
            return Err(RtcError::Unsupported(format!("{} on a {} track", operation, self.kind)));
        }
        Ok(())
    }
}

impl RtcHandle for MockLocalTrack {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn class_name(&self) -> &'static str {
        match self.kind {
            TrackKind::Audio => "LocalAudioTrack",
            TrackKind::Video => "LocalVideoTrack",
            TrackKind::Unknown => "LocalTrack",
        }
    }
}

#[async_trait]
impl Track for MockLocalTrack {
    fn sid(&self) -> Option<TrackSid> {
        Some(self.sid.clone())
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn source(&self) -> TrackSource {
        self.source
    }

    fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    fn stream_state(&self) -> StreamState {
        if self.is_stopped() {
            StreamState::Paused
        } else {
            StreamState::Active
        }
    }

    fn media_stream_track_id(&self) -> String {
        format!("local-{}", self.id.as_u64())
    }

    fn dimensions(&self) -> Option<TrackDimensions> {
        *self.dimensions.lock()
    }

    fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            self.emit(TrackEvent::Ended);
        }
    }

    fn variant(self: Arc<Self>) -> TrackVariant {
        TrackVariant::Local(self)
    }

    fn into_track(self: Arc<Self>) -> Arc<dyn Track> {
        self
    }

    fn add_listener(&self, listener: Listener<TrackEvent>) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

#[async_trait]
impl LocalTrack for MockLocalTrack {
    async fn mute(&self) -> RtcResult<()> {
        if !self.muted.swap(true, Ordering::SeqCst) {
            self.emit(TrackEvent::Muted);
        }
        Ok(())
    }

    async fn unmute(&self) -> RtcResult<()> {
        if self.muted.swap(false, Ordering::SeqCst) {
            self.emit(TrackEvent::Unmuted);
        }
        Ok(())
    }

    async fn restart(&self, options: Option<TrackCaptureOptions>) -> RtcResult<()> {
        match (self.kind, &options) {
            (TrackKind::Audio, Some(TrackCaptureOptions::Video(_)))
            | (TrackKind::Video, Some(TrackCaptureOptions::Audio(_))) => {
                return Err(RtcError::Track("capture options don't match the track kind".into()));
            }
            _ => {}
        }

        match options {
            Some(TrackCaptureOptions::Audio(options)) => *self.device_id.lock() = options.device_id,
            Some(TrackCaptureOptions::Video(options)) => {
                *self.device_id.lock() = options.device_id;
                *self.dimensions.lock() = Some(TrackDimensions {
                    width: options.resolution.width,
                    height: options.resolution.height,
                });
            }
            None => {}
        }

        self.stopped.store(false, Ordering::SeqCst);
        self.emit(TrackEvent::Restarted);
        Ok(())
    }

    async fn set_device_id(&self, device_id: &str) -> RtcResult<bool> {
        if self.is_stopped() {
            return Ok(false);
        }
        *self.device_id.lock() = Some(device_id.to_owned());
        Ok(true)
    }

    fn device_id(&self) -> Option<String> {
        self.device_id.lock().clone()
    }

    async fn pause_upstream(&self) -> RtcResult<()> {
        if !self.upstream_paused.swap(true, Ordering::SeqCst) {
            self.emit(TrackEvent::UpstreamPaused);
        }
        Ok(())
    }

    async fn resume_upstream(&self) -> RtcResult<()> {
        if self.upstream_paused.swap(false, Ordering::SeqCst) {
            self.emit(TrackEvent::UpstreamResumed);
        }
        Ok(())
    }

    fn is_upstream_paused(&self) -> bool {
        self.upstream_paused.load(Ordering::SeqCst)
    }

    fn set_publishing_quality(&self, quality: VideoQuality) -> RtcResult<()> {
        self.require_video("set_publishing_quality")?;
        *self.publishing_quality.lock() = Some(quality);
        Ok(())
    }

    async fn add_simulcast_layer(
        &self,
        codec: VideoCodec,
        encoding: VideoEncoding,
    ) -> RtcResult<()> {
        self.require_video("add_simulcast_layer")?;
        self.simulcast_layers.lock().push((codec, encoding));
        Ok(())
    }

    async fn sender_stats(&self) -> RtcResult<Vec<SenderStats>> {
        let dimensions = self.dimensions();
        Ok(vec![SenderStats {
            stream_id: self.media_stream_track_id(),
            rid: dimensions.map(|_| "f".to_owned()),
            frame_width: dimensions.map(|d| d.width),
            frame_height: dimensions.map(|d| d.height),
            ..Default::default()
        }])
    }
}

pub struct MockRemoteTrack {
    id: ObjectId,
    sid: TrackSid,
    name: String,
    kind: TrackKind,
    source: TrackSource,
    adaptive_stream: bool,
    muted: AtomicBool,
    ended: AtomicBool,
    stream_state: Mutex<StreamState>,
    volume: Mutex<f32>,
    playout_delay: Mutex<Option<f64>>,
    dimensions: Mutex<Option<TrackDimensions>>,
    listeners: ListenerSet<TrackEvent>,
}

impl MockRemoteTrack {
    pub fn new(kind: TrackKind, source: TrackSource) -> Arc<Self> {
        Self::with_sid(next_sid("TR").into(), source.as_str().to_owned(), kind, source, false)
    }

    pub(crate) fn with_sid(
        sid: TrackSid,
        name: String,
        kind: TrackKind,
        source: TrackSource,
        adaptive_stream: bool,
    ) -> Arc<Self> {
        let dimensions = match kind {
            TrackKind::Video => Some(TrackDimensions { width: 640, height: 360 }),
            _ => None,
        };

        Arc::new(Self {
            id: ObjectId::next(),
            sid,
            name,
            kind,
            source,
            adaptive_stream,
            muted: AtomicBool::new(false),
            ended: AtomicBool::new(false),
            stream_state: Mutex::new(StreamState::Active),
            volume: Mutex::new(1.0),
            playout_delay: Default::default(),
            dimensions: Mutex::new(dimensions),
            listeners: Default::default(),
        })
    }

    pub fn emit(&self, event: TrackEvent) {
        self.listeners.emit(&event);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_muted(&self, muted: bool) {
        if self.muted.swap(muted, Ordering::SeqCst) != muted {
            self.emit(if muted { TrackEvent::Muted } else { TrackEvent::Unmuted });
        }
    }

    pub fn set_stream_state(&self, state: StreamState) {
        let changed = {
            let mut current = self.stream_state.lock();
            std::mem::replace(&mut *current, state) != state
        };
        if changed {
            self.emit(TrackEvent::StreamStateChanged(state));
        }
    }

    pub fn set_dimensions(&self, dimensions: TrackDimensions) {
        *self.dimensions.lock() = Some(dimensions);
        self.emit(TrackEvent::VideoDimensionsChanged(dimensions));
    }
}

impl RtcHandle for MockRemoteTrack {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn class_name(&self) -> &'static str {
        match self.kind {
            TrackKind::Audio => "RemoteAudioTrack",
            TrackKind::Video => "RemoteVideoTrack",
            TrackKind::Unknown => "RemoteTrack",
        }
    }
}

#[async_trait]
impl Track for MockRemoteTrack {
    fn sid(&self) -> Option<TrackSid> {
        Some(self.sid.clone())
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn source(&self) -> TrackSource {
        self.source
    }

    fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    fn stream_state(&self) -> StreamState {
        *self.stream_state.lock()
    }

    fn media_stream_track_id(&self) -> String {
        format!("remote-{}", self.id.as_u64())
    }

    fn dimensions(&self) -> Option<TrackDimensions> {
        *self.dimensions.lock()
    }

    fn stop(&self) {
        if !self.ended.swap(true, Ordering::SeqCst) {
            self.emit(TrackEvent::Ended);
        }
    }

    fn variant(self: Arc<Self>) -> TrackVariant {
        TrackVariant::Remote(self)
    }

    fn into_track(self: Arc<Self>) -> Arc<dyn Track> {
        self
    }

    fn add_listener(&self, listener: Listener<TrackEvent>) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

#[async_trait]
impl RemoteTrack for MockRemoteTrack {
    fn volume(&self) -> Option<f32> {
        match self.kind {
            TrackKind::Audio => Some(*self.volume.lock()),
            _ => None,
        }
    }

    fn set_volume(&self, volume: f32) {
        *self.volume.lock() = volume;
    }

    fn playout_delay(&self) -> Option<f64> {
        *self.playout_delay.lock()
    }

    fn set_playout_delay(&self, delay: f64) {
        *self.playout_delay.lock() = Some(delay);
    }

    fn is_adaptive_stream(&self) -> bool {
        self.adaptive_stream
    }

    async fn receiver_stats(&self) -> RtcResult<Option<ReceiverStats>> {
        if self.ended.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let dimensions = self.dimensions();
        Ok(Some(ReceiverStats {
            stream_id: self.media_stream_track_id(),
            frame_width: dimensions.map(|d| d.width),
            frame_height: dimensions.map(|d| d.height),
            ..Default::default()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mute_emits_only_on_transition() {
        let track = MockLocalTrack::new(TrackKind::Video, TrackSource::Camera);
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let events = events.clone();
            track.add_listener(Arc::new(move |event: &TrackEvent| {
                events.lock().push(event.clone())
            }));
        }

        track.mute().await.unwrap();
        track.mute().await.unwrap();
        track.unmute().await.unwrap();

        assert_eq!(*events.lock(), vec![TrackEvent::Muted, TrackEvent::Unmuted]);
    }

    #[tokio::test]
    async fn video_only_operations_fail_on_audio() {
        let track = MockLocalTrack::new(TrackKind::Audio, TrackSource::Microphone);
        assert!(matches!(
            track.set_publishing_quality(VideoQuality::Low),
            Err(RtcError::Unsupported(_))
        ));
        assert_eq!(track.publishing_quality(), None);
    }
}
