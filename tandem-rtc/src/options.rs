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

use crate::{enums::*, id::*};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoResolution {
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    pub aspect_ratio: f32,
}

impl VideoResolution {
    pub const fn new(width: u32, height: u32, frame_rate: f64) -> Self {
        Self { width, height, frame_rate, aspect_ratio: width as f32 / height as f32 }
    }
}

impl Default for VideoResolution {
    fn default() -> Self {
        Self::new(1280, 720, 30.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoEncoding {
    pub max_bitrate: u64,
    pub max_framerate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioEncoding {
    pub max_bitrate: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackPublishOptions {
    // If the encodings aren't set, the client computes the most appropriate ones
    pub video_encoding: Option<VideoEncoding>,
    pub audio_encoding: Option<AudioEncoding>,
    pub video_codec: VideoCodec,
    pub backup_codec: Option<VideoCodec>,
    pub scalability_mode: Option<ScalabilityMode>,
    pub dtx: bool,
    pub red: bool,
    pub simulcast: bool,
    pub name: String,
    pub source: TrackSource,
    pub stream: String,
    pub preconnect_buffer: bool,
}

impl Default for TrackPublishOptions {
    fn default() -> Self {
        Self {
            video_encoding: None,
            audio_encoding: None,
            video_codec: VideoCodec::VP8,
            backup_codec: None,
            scalability_mode: None,
            dtx: true,
            red: true,
            simulcast: true,
            name: String::new(),
            source: TrackSource::Unknown,
            stream: String::new(),
            preconnect_buffer: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioCaptureOptions {
    pub device_id: Option<String>,
    pub echo_cancellation: bool,
    pub noise_suppression: bool,
    pub auto_gain_control: bool,
    pub channel_count: u32,
    pub sample_rate: u32,
}

impl Default for AudioCaptureOptions {
    fn default() -> Self {
        Self {
            device_id: None,
            echo_cancellation: true,
            noise_suppression: true,
            auto_gain_control: true,
            channel_count: 1,
            sample_rate: 48000,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoCaptureOptions {
    pub device_id: Option<String>,
    pub facing_mode: Option<FacingMode>,
    pub resolution: VideoResolution,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenShareCaptureOptions {
    pub audio: bool,
    pub resolution: Option<VideoResolution>,
    pub content_hint: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateLocalTracksOptions {
    pub audio: Option<AudioCaptureOptions>,
    pub video: Option<VideoCaptureOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct E2eeOptions {
    pub encryption_type: EncryptionType,
    pub shared_key: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoomOptions {
    pub adaptive_stream: bool,
    pub dynacast: bool,
    pub stop_local_track_on_unpublish: bool,
    pub publish_defaults: TrackPublishOptions,
    pub audio_capture_defaults: AudioCaptureOptions,
    pub video_capture_defaults: VideoCaptureOptions,
    pub e2ee: Option<E2eeOptions>,
}

impl Default for RoomOptions {
    fn default() -> Self {
        Self {
            adaptive_stream: false,
            dynacast: false,
            stop_local_track_on_unpublish: true,
            publish_defaults: Default::default(),
            audio_capture_defaults: Default::default(),
            video_capture_defaults: Default::default(),
            e2ee: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectOptions {
    pub auto_subscribe: bool,
    pub max_retries: u32,
    pub peer_connection_timeout_ms: u64,
    pub websocket_timeout_ms: u64,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            auto_subscribe: true,
            max_retries: 1,
            peer_connection_timeout_ms: 15_000,
            websocket_timeout_ms: 15_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPublishOptions {
    pub kind: DataPacketKind,
    pub destination_identities: Vec<ParticipantIdentity>,
    pub topic: Option<String>,
}

impl Default for DataPublishOptions {
    fn default() -> Self {
        Self { kind: DataPacketKind::Reliable, destination_identities: Vec::new(), topic: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackPermission {
    pub participant_identity: ParticipantIdentity,
    pub all_tracks_allowed: bool,
    pub allowed_track_sids: Vec<TrackSid>,
}

/// Capture settings used when a local track restarts its source.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackCaptureOptions {
    Audio(AudioCaptureOptions),
    Video(VideoCaptureOptions),
}
