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

//! Option shapes accepted and returned by the facade.
//!
//! Shapes without enum-valued fields are the client's own and are re-exported
//! as is. The others mirror the client's field by field with facade enums.

use tandem_rtc::ParticipantIdentity;

use crate::enums::*;

pub use tandem_rtc::options::{
    AudioCaptureOptions, AudioEncoding, ConnectOptions, ScreenShareCaptureOptions,
    TrackDimensions, TrackPermission, VideoEncoding, VideoResolution,
};

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
            video_codec: VideoCodec::Vp8,
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

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoCaptureOptions {
    pub device_id: Option<String>,
    pub facing_mode: Option<FacingMode>,
    pub resolution: VideoResolution,
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
