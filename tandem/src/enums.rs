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

//! Enumerations of the facade. Each has its own member names, distinct from
//! the client's, and serializes as UPPER_SNAKE_CASE.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UntranslatableEnumValue;

macro_rules! facade_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $str:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $str)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UntranslatableEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok($name::$variant),)+
                    _ => Err(UntranslatableEnumValue::new(stringify!($name), s)),
                }
            }
        }
    };
}

facade_enum! {
    /// State of the connection to the server, as reported by the client.
    ///
    /// `Disconnected → Connecting → Connected ⇄ Reconnecting ⇄ SignalReconnecting`,
    /// and `Disconnected` from any state.
    pub enum ConnectionState {
        Disconnected => "DISCONNECTED",
        Connecting => "CONNECTING",
        Connected => "CONNECTED",
        Reconnecting => "RECONNECTING",
        SignalReconnecting => "SIGNAL_RECONNECTING",
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::Disconnected
    }
}

facade_enum! {
    pub enum DisconnectReason {
        Unknown => "UNKNOWN_REASON",
        ClientInitiated => "CLIENT_INITIATED",
        DuplicateIdentity => "DUPLICATE_IDENTITY",
        ServerShutdown => "SERVER_SHUTDOWN",
        ParticipantRemoved => "PARTICIPANT_REMOVED",
        RoomDeleted => "ROOM_DELETED",
        StateMismatch => "STATE_MISMATCH",
        JoinFailure => "JOIN_FAILURE",
        Migration => "MIGRATION",
        SignalClose => "SIGNAL_CLOSE",
        RoomClosed => "ROOM_CLOSED",
        UserUnavailable => "USER_UNAVAILABLE",
        UserRejected => "USER_REJECTED",
        SipTrunkFailure => "SIP_TRUNK_FAILURE",
        ConnectionTimeout => "CONNECTION_TIMEOUT",
        MediaFailure => "MEDIA_FAILURE",
    }
}

facade_enum! {
    pub enum ParticipantKind {
        Standard => "STANDARD",
        Ingress => "INGRESS",
        Egress => "EGRESS",
        Sip => "SIP",
        Agent => "AGENT",
    }
}

facade_enum! {
    pub enum ConnectionQuality {
        Excellent => "EXCELLENT",
        Good => "GOOD",
        Poor => "POOR",
        Lost => "LOST",
        Unknown => "UNKNOWN",
    }
}

facade_enum! {
    pub enum TrackKind {
        Audio => "AUDIO",
        Video => "VIDEO",
    }
}

facade_enum! {
    pub enum TrackSource {
        Unknown => "UNKNOWN",
        Camera => "CAMERA",
        Microphone => "MICROPHONE",
        ScreenShare => "SCREEN_SHARE",
        ScreenShareAudio => "SCREEN_SHARE_AUDIO",
    }
}

facade_enum! {
    pub enum StreamState {
        Active => "ACTIVE",
        Paused => "PAUSED",
        Unknown => "UNKNOWN",
    }
}

facade_enum! {
    pub enum SubscriptionStatus {
        Desired => "DESIRED",
        Subscribed => "SUBSCRIBED",
        Unsubscribed => "UNSUBSCRIBED",
    }
}

facade_enum! {
    pub enum PermissionStatus {
        Allowed => "ALLOWED",
        NotAllowed => "NOT_ALLOWED",
    }
}

facade_enum! {
    pub enum SubscriptionError {
        Unknown => "UNKNOWN",
        CodecUnsupported => "CODEC_UNSUPPORTED",
        TrackNotFound => "TRACK_NOT_FOUND",
    }
}

facade_enum! {
    pub enum VideoQuality {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

facade_enum! {
    pub enum VideoCodec {
        Vp8 => "VP8",
        H264 => "H264",
        Vp9 => "VP9",
        Av1 => "AV1",
        H265 => "H265",
    }
}

facade_enum! {
    /// SVC modes, `L<spatial layers>T<temporal layers>`. `H` modes use a 1.5x
    /// ratio between spatial layers, `Key` modes only share key frames.
    pub enum ScalabilityMode {
        L1T1 => "L1T1",
        L1T2 => "L1T2",
        L1T3 => "L1T3",
        L2T1 => "L2T1",
        L2T1H => "L2T1H",
        L2T1Key => "L2T1_KEY",
        L2T2 => "L2T2",
        L2T2H => "L2T2H",
        L2T2Key => "L2T2_KEY",
        L2T3 => "L2T3",
        L2T3H => "L2T3H",
        L2T3Key => "L2T3_KEY",
        L3T1 => "L3T1",
        L3T1H => "L3T1H",
        L3T1Key => "L3T1_KEY",
        L3T2 => "L3T2",
        L3T2H => "L3T2H",
        L3T2Key => "L3T2_KEY",
        L3T3 => "L3T3",
        L3T3H => "L3T3H",
        L3T3Key => "L3T3_KEY",
    }
}

facade_enum! {
    pub enum AudioTrackFeature {
        Stereo => "STEREO",
        NoDtx => "NO_DTX",
        AutoGainControl => "AUTO_GAIN_CONTROL",
        EchoCancellation => "ECHO_CANCELLATION",
        NoiseSuppression => "NOISE_SUPPRESSION",
        EnhancedNoiseCancellation => "ENHANCED_NOISE_CANCELLATION",
        PreconnectBuffer => "PRECONNECT_BUFFER",
    }
}

facade_enum! {
    pub enum EncryptionType {
        None => "NONE",
        Gcm => "GCM",
        Custom => "CUSTOM",
    }
}

facade_enum! {
    pub enum DataPacketKind {
        Reliable => "RELIABLE",
        Lossy => "LOSSY",
    }
}

facade_enum! {
    pub enum MediaDeviceKind {
        AudioInput => "AUDIO_INPUT",
        AudioOutput => "AUDIO_OUTPUT",
        VideoInput => "VIDEO_INPUT",
    }
}

facade_enum! {
    pub enum FacingMode {
        User => "USER",
        Environment => "ENVIRONMENT",
        Left => "LEFT",
        Right => "RIGHT",
    }
}
