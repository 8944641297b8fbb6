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

//! Enumerations exposed by the client. Names returned by `as_str` follow the
//! client's own camelCase convention.

use std::fmt;

macro_rules! rtc_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $str:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
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
    };
}

rtc_enum! {
    pub enum ConnectionState {
        Disconnected => "disconnected",
        Connecting => "connecting",
        Connected => "connected",
        Reconnecting => "reconnecting",
        SignalReconnecting => "signalReconnecting",
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::Disconnected
    }
}

rtc_enum! {
    pub enum DisconnectReason {
        UnknownReason => "unknownReason",
        ClientInitiated => "clientInitiated",
        DuplicateIdentity => "duplicateIdentity",
        ServerShutdown => "serverShutdown",
        ParticipantRemoved => "participantRemoved",
        RoomDeleted => "roomDeleted",
        StateMismatch => "stateMismatch",
        JoinFailure => "joinFailure",
        Migration => "migration",
        SignalClose => "signalClose",
        RoomClosed => "roomClosed",
        UserUnavailable => "userUnavailable",
        UserRejected => "userRejected",
        SipTrunkFailure => "sipTrunkFailure",
        ConnectionTimeout => "connectionTimeout",
        MediaFailure => "mediaFailure",
    }
}

rtc_enum! {
    pub enum ParticipantKind {
        Standard => "standard",
        Ingress => "ingress",
        Egress => "egress",
        Sip => "sip",
        Agent => "agent",
    }
}

rtc_enum! {
    pub enum ConnectionQuality {
        Excellent => "excellent",
        Good => "good",
        Poor => "poor",
        Lost => "lost",
        Unknown => "unknown",
    }
}

rtc_enum! {
    /// `Unknown` is reported by tracks whose media kind the client could not
    /// determine.
    pub enum TrackKind {
        Audio => "audio",
        Video => "video",
        Unknown => "unknown",
    }
}

rtc_enum! {
    pub enum TrackSource {
        Unknown => "unknown",
        Camera => "camera",
        Microphone => "microphone",
        Screenshare => "screen_share",
        ScreenshareAudio => "screen_share_audio",
    }
}

rtc_enum! {
    pub enum StreamState {
        Active => "active",
        Paused => "paused",
        Unknown => "unknown",
    }
}

rtc_enum! {
    pub enum SubscriptionStatus {
        Desired => "desired",
        Subscribed => "subscribed",
        Unsubscribed => "unsubscribed",
    }
}

rtc_enum! {
    pub enum PermissionStatus {
        Allowed => "allowed",
        NotAllowed => "not_allowed",
    }
}

rtc_enum! {
    pub enum SubscriptionError {
        Unknown => "unknown",
        CodecUnsupported => "codecUnsupported",
        TrackNotFound => "trackNotFound",
    }
}

rtc_enum! {
    pub enum VideoQuality {
        Low => "low",
        Medium => "medium",
        High => "high",
        Off => "off",
    }
}

rtc_enum! {
    pub enum VideoCodec {
        VP8 => "vp8",
        H264 => "h264",
        VP9 => "vp9",
        AV1 => "av1",
        H265 => "h265",
    }
}

rtc_enum! {
    pub enum ScalabilityMode {
        L1T1 => "L1T1",
        L1T2 => "L1T2",
        L1T3 => "L1T3",
        L2T1 => "L2T1",
        L2T1h => "L2T1h",
        L2T1Key => "L2T1_KEY",
        L2T2 => "L2T2",
        L2T2h => "L2T2h",
        L2T2Key => "L2T2_KEY",
        L2T3 => "L2T3",
        L2T3h => "L2T3h",
        L2T3Key => "L2T3_KEY",
        L3T1 => "L3T1",
        L3T1h => "L3T1h",
        L3T1Key => "L3T1_KEY",
        L3T2 => "L3T2",
        L3T2h => "L3T2h",
        L3T2Key => "L3T2_KEY",
        L3T3 => "L3T3",
        L3T3h => "L3T3h",
        L3T3Key => "L3T3_KEY",
    }
}

rtc_enum! {
    pub enum AudioTrackFeature {
        Stereo => "TF_STEREO",
        NoDtx => "TF_NO_DTX",
        AutoGainControl => "TF_AUTO_GAIN_CONTROL",
        EchoCancellation => "TF_ECHO_CANCELLATION",
        NoiseSuppression => "TF_NOISE_SUPPRESSION",
        EnhancedNoiseCancellation => "TF_ENHANCED_NOISE_CANCELLATION",
        PreconnectBuffer => "TF_PRECONNECT_BUFFER",
    }
}

rtc_enum! {
    pub enum EncryptionType {
        None => "none",
        Gcm => "gcm",
        Custom => "custom",
    }
}

rtc_enum! {
    pub enum DataPacketKind {
        Reliable => "reliable",
        Lossy => "lossy",
    }
}

rtc_enum! {
    pub enum MediaDeviceKind {
        AudioInput => "audioinput",
        AudioOutput => "audiooutput",
        VideoInput => "videoinput",
    }
}

rtc_enum! {
    pub enum FacingMode {
        User => "user",
        Environment => "environment",
        Left => "left",
        Right => "right",
    }
}
