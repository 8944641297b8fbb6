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

use tandem_rtc as rtc;

use crate::options::*;

impl From<TrackPublishOptions> for rtc::TrackPublishOptions {
    fn from(options: TrackPublishOptions) -> Self {
        Self {
            video_encoding: options.video_encoding,
            audio_encoding: options.audio_encoding,
            video_codec: options.video_codec.into(),
            backup_codec: options.backup_codec.map(Into::into),
            scalability_mode: options.scalability_mode.map(Into::into),
            dtx: options.dtx,
            red: options.red,
            simulcast: options.simulcast,
            name: options.name,
            source: options.source.into(),
            stream: options.stream,
            preconnect_buffer: options.preconnect_buffer,
        }
    }
}

impl From<rtc::TrackPublishOptions> for TrackPublishOptions {
    fn from(options: rtc::TrackPublishOptions) -> Self {
        Self {
            video_encoding: options.video_encoding,
            audio_encoding: options.audio_encoding,
            video_codec: options.video_codec.into(),
            backup_codec: options.backup_codec.map(Into::into),
            scalability_mode: options.scalability_mode.map(Into::into),
            dtx: options.dtx,
            red: options.red,
            simulcast: options.simulcast,
            name: options.name,
            source: options.source.into(),
            stream: options.stream,
            preconnect_buffer: options.preconnect_buffer,
        }
    }
}

impl From<VideoCaptureOptions> for rtc::VideoCaptureOptions {
    fn from(options: VideoCaptureOptions) -> Self {
        Self {
            device_id: options.device_id,
            facing_mode: options.facing_mode.map(Into::into),
            resolution: options.resolution,
        }
    }
}

impl From<rtc::VideoCaptureOptions> for VideoCaptureOptions {
    fn from(options: rtc::VideoCaptureOptions) -> Self {
        Self {
            device_id: options.device_id,
            facing_mode: options.facing_mode.map(Into::into),
            resolution: options.resolution,
        }
    }
}

impl From<CreateLocalTracksOptions> for rtc::CreateLocalTracksOptions {
    fn from(options: CreateLocalTracksOptions) -> Self {
        Self { audio: options.audio, video: options.video.map(Into::into) }
    }
}

impl From<E2eeOptions> for rtc::E2eeOptions {
    fn from(options: E2eeOptions) -> Self {
        Self {
            encryption_type: options.encryption_type.into(),
            shared_key: options.shared_key,
        }
    }
}

impl From<rtc::E2eeOptions> for E2eeOptions {
    fn from(options: rtc::E2eeOptions) -> Self {
        Self {
            encryption_type: options.encryption_type.into(),
            shared_key: options.shared_key,
        }
    }
}

impl From<RoomOptions> for rtc::RoomOptions {
    fn from(options: RoomOptions) -> Self {
        Self {
            adaptive_stream: options.adaptive_stream,
            dynacast: options.dynacast,
            stop_local_track_on_unpublish: options.stop_local_track_on_unpublish,
            publish_defaults: options.publish_defaults.into(),
            audio_capture_defaults: options.audio_capture_defaults,
            video_capture_defaults: options.video_capture_defaults.into(),
            e2ee: options.e2ee.map(Into::into),
        }
    }
}

impl From<rtc::RoomOptions> for RoomOptions {
    fn from(options: rtc::RoomOptions) -> Self {
        Self {
            adaptive_stream: options.adaptive_stream,
            dynacast: options.dynacast,
            stop_local_track_on_unpublish: options.stop_local_track_on_unpublish,
            publish_defaults: options.publish_defaults.into(),
            audio_capture_defaults: options.audio_capture_defaults,
            video_capture_defaults: options.video_capture_defaults.into(),
            e2ee: options.e2ee.map(Into::into),
        }
    }
}

impl From<DataPublishOptions> for rtc::DataPublishOptions {
    fn from(options: DataPublishOptions) -> Self {
        Self {
            kind: options.kind.into(),
            destination_identities: options.destination_identities,
            topic: options.topic,
        }
    }
}
