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

use crate::stats::{ReceiverStats, SenderStats};

impl From<rtc::SenderStats> for SenderStats {
    fn from(stats: rtc::SenderStats) -> Self {
        Self {
            stream_id: stats.stream_id,
            rid: stats.rid,
            timestamp_ms: stats.timestamp_ms,
            packets_sent: stats.packets_sent,
            bytes_sent: stats.bytes_sent,
            frame_width: stats.frame_width,
            frame_height: stats.frame_height,
            frames_per_second: stats.frames_per_second,
            target_bitrate: stats.target_bitrate,
            quality_limitation_reason: stats.quality_limitation_reason,
            round_trip_time: stats.round_trip_time,
            jitter: stats.jitter,
            packets_lost: stats.packets_lost,
            mime_type: stats.mime_type,
        }
    }
}

impl From<rtc::ReceiverStats> for ReceiverStats {
    fn from(stats: rtc::ReceiverStats) -> Self {
        Self {
            stream_id: stats.stream_id,
            timestamp_ms: stats.timestamp_ms,
            packets_received: stats.packets_received,
            packets_lost: stats.packets_lost,
            bytes_received: stats.bytes_received,
            jitter: stats.jitter,
            frame_width: stats.frame_width,
            frame_height: stats.frame_height,
            frames_decoded: stats.frames_decoded,
            frames_dropped: stats.frames_dropped,
            concealed_samples: stats.concealed_samples,
            concealment_events: stats.concealment_events,
            mime_type: stats.mime_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_stats_serialize_in_camel_case() {
        let stats = SenderStats::from(rtc::SenderStats {
            stream_id: "TR_1".into(),
            rid: Some("h".into()),
            bytes_sent: 1200,
            ..Default::default()
        });

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["streamId"], "TR_1");
        assert_eq!(json["bytesSent"], 1200);
        assert!(json["frameWidth"].is_null());
    }
}
