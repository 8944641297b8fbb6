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

/// Outbound RTP statistics of a published local track, one entry per layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SenderStats {
    pub stream_id: String,
    pub rid: Option<String>,
    pub timestamp_ms: u64,
    pub packets_sent: u64,
    pub bytes_sent: u64,
    pub frame_width: Option<u32>,
    pub frame_height: Option<u32>,
    pub frames_per_second: Option<f64>,
    pub target_bitrate: Option<f64>,
    pub quality_limitation_reason: Option<String>,
    pub round_trip_time: Option<f64>,
    pub jitter: Option<f64>,
    pub packets_lost: Option<i64>,
    pub mime_type: Option<String>,
}

/// Inbound RTP statistics of a subscribed remote track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiverStats {
    pub stream_id: String,
    pub timestamp_ms: u64,
    pub packets_received: u64,
    pub packets_lost: i64,
    pub bytes_received: u64,
    pub jitter: Option<f64>,
    pub frame_width: Option<u32>,
    pub frame_height: Option<u32>,
    pub frames_decoded: Option<u32>,
    pub frames_dropped: Option<u32>,
    pub concealed_samples: Option<u64>,
    pub concealment_events: Option<u64>,
    pub mime_type: Option<String>,
}
