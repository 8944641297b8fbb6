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

use tandem_rtc::TrackSid;
use tokio::sync::mpsc;

use super::{TrackEvent, TrackInner};
use crate::{
    enums::{StreamState, TrackKind, TrackSource},
    error::FacadeResult,
    options::TrackDimensions,
    stats::ReceiverStats,
};

facade_handle!(RemoteVideoTrack => TrackInner);

impl RemoteVideoTrack {
    track_methods!();
    remote_track_methods!();
}
