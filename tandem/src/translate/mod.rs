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

//! Conversions between the client's values and the facade's.
//!
//! Enum mappings are total in both directions over the facade's domain. The
//! only lossy ones are written by hand below the macro invocations.

use tandem_rtc as rtc;

use crate::{enums::*, error::UntranslatableEnumValue};

mod device;
mod options;
mod stats;

macro_rules! translate_enum {
    ($name:ident { $($facade:ident <=> $upstream:ident),+ $(,)? }) => {
        impl From<rtc::$name> for $name {
            fn from(value: rtc::$name) -> Self {
                match value {
                    $(rtc::$name::$upstream => Self::$facade,)+
                }
            }
        }

        impl From<$name> for rtc::$name {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$facade => Self::$upstream,)+
                }
            }
        }
    };
}

translate_enum!(ConnectionState {
    Disconnected <=> Disconnected,
    Connecting <=> Connecting,
    Connected <=> Connected,
    Reconnecting <=> Reconnecting,
    SignalReconnecting <=> SignalReconnecting,
});

translate_enum!(DisconnectReason {
    Unknown <=> UnknownReason,
    ClientInitiated <=> ClientInitiated,
    DuplicateIdentity <=> DuplicateIdentity,
    ServerShutdown <=> ServerShutdown,
    ParticipantRemoved <=> ParticipantRemoved,
    RoomDeleted <=> RoomDeleted,
    StateMismatch <=> StateMismatch,
    JoinFailure <=> JoinFailure,
    Migration <=> Migration,
    SignalClose <=> SignalClose,
    RoomClosed <=> RoomClosed,
    UserUnavailable <=> UserUnavailable,
    UserRejected <=> UserRejected,
    SipTrunkFailure <=> SipTrunkFailure,
    ConnectionTimeout <=> ConnectionTimeout,
    MediaFailure <=> MediaFailure,
});

translate_enum!(ParticipantKind {
    Standard <=> Standard,
    Ingress <=> Ingress,
    Egress <=> Egress,
    Sip <=> Sip,
    Agent <=> Agent,
});

translate_enum!(ConnectionQuality {
    Excellent <=> Excellent,
    Good <=> Good,
    Poor <=> Poor,
    Lost <=> Lost,
    Unknown <=> Unknown,
});

translate_enum!(TrackSource {
    Unknown <=> Unknown,
    Camera <=> Camera,
    Microphone <=> Microphone,
    ScreenShare <=> Screenshare,
    ScreenShareAudio <=> ScreenshareAudio,
});

translate_enum!(StreamState {
    Active <=> Active,
    Paused <=> Paused,
    Unknown <=> Unknown,
});

translate_enum!(SubscriptionStatus {
    Desired <=> Desired,
    Subscribed <=> Subscribed,
    Unsubscribed <=> Unsubscribed,
});

translate_enum!(PermissionStatus {
    Allowed <=> Allowed,
    NotAllowed <=> NotAllowed,
});

translate_enum!(SubscriptionError {
    Unknown <=> Unknown,
    CodecUnsupported <=> CodecUnsupported,
    TrackNotFound <=> TrackNotFound,
});

translate_enum!(VideoCodec {
    Vp8 <=> VP8,
    H264 <=> H264,
    Vp9 <=> VP9,
    Av1 <=> AV1,
    H265 <=> H265,
});

translate_enum!(ScalabilityMode {
    L1T1 <=> L1T1,
    L1T2 <=> L1T2,
    L1T3 <=> L1T3,
    L2T1 <=> L2T1,
    L2T1H <=> L2T1h,
    L2T1Key <=> L2T1Key,
    L2T2 <=> L2T2,
    L2T2H <=> L2T2h,
    L2T2Key <=> L2T2Key,
    L2T3 <=> L2T3,
    L2T3H <=> L2T3h,
    L2T3Key <=> L2T3Key,
    L3T1 <=> L3T1,
    L3T1H <=> L3T1h,
    L3T1Key <=> L3T1Key,
    L3T2 <=> L3T2,
    L3T2H <=> L3T2h,
    L3T2Key <=> L3T2Key,
    L3T3 <=> L3T3,
    L3T3H <=> L3T3h,
    L3T3Key <=> L3T3Key,
});

translate_enum!(AudioTrackFeature {
    Stereo <=> Stereo,
    NoDtx <=> NoDtx,
    AutoGainControl <=> AutoGainControl,
    EchoCancellation <=> EchoCancellation,
    NoiseSuppression <=> NoiseSuppression,
    EnhancedNoiseCancellation <=> EnhancedNoiseCancellation,
    PreconnectBuffer <=> PreconnectBuffer,
});

translate_enum!(EncryptionType {
    None <=> None,
    Gcm <=> Gcm,
    Custom <=> Custom,
});

translate_enum!(DataPacketKind {
    Reliable <=> Reliable,
    Lossy <=> Lossy,
});

translate_enum!(MediaDeviceKind {
    AudioInput <=> AudioInput,
    AudioOutput <=> AudioOutput,
    VideoInput <=> VideoInput,
});

translate_enum!(FacingMode {
    User <=> User,
    Environment <=> Environment,
    Left <=> Left,
    Right <=> Right,
});

// A layer that is switched off is reported as the lowest quality.
impl From<rtc::VideoQuality> for VideoQuality {
    fn from(value: rtc::VideoQuality) -> Self {
        match value {
            rtc::VideoQuality::Low | rtc::VideoQuality::Off => Self::Low,
            rtc::VideoQuality::Medium => Self::Medium,
            rtc::VideoQuality::High => Self::High,
        }
    }
}

impl From<VideoQuality> for rtc::VideoQuality {
    fn from(value: VideoQuality) -> Self {
        match value {
            VideoQuality::Low => Self::Low,
            VideoQuality::Medium => Self::Medium,
            VideoQuality::High => Self::High,
        }
    }
}

impl TryFrom<rtc::TrackKind> for TrackKind {
    type Error = UntranslatableEnumValue;

    fn try_from(value: rtc::TrackKind) -> Result<Self, Self::Error> {
        match value {
            rtc::TrackKind::Audio => Ok(Self::Audio),
            rtc::TrackKind::Video => Ok(Self::Video),
            rtc::TrackKind::Unknown => {
                Err(UntranslatableEnumValue::new("TrackKind", value.as_str()))
            }
        }
    }
}

impl From<TrackKind> for rtc::TrackKind {
    fn from(value: TrackKind) -> Self {
        match value {
            TrackKind::Audio => Self::Audio,
            TrackKind::Video => Self::Video,
        }
    }
}

/// Translates a track kind reported by an object the facade already wraps.
///
/// Such objects were classified as audio or video when they were wrapped, so
/// a kind without facade counterpart is a defect of the client.
pub(crate) fn known_track_kind(value: rtc::TrackKind) -> TrackKind {
    match TrackKind::try_from(value) {
        Ok(kind) => kind,
        Err(err) => {
            log::error!("wrapped track changed kind: {}", err);
            panic!("{}", err);
        }
    }
}
