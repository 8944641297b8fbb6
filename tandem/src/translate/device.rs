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

use crate::device::MediaDeviceInfo;

impl From<rtc::MediaDeviceInfo> for MediaDeviceInfo {
    fn from(info: rtc::MediaDeviceInfo) -> Self {
        Self {
            device_id: info.device_id,
            kind: info.kind.into(),
            label: info.label,
            group_id: info.group_id,
        }
    }
}
