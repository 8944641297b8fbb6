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

use tandem::{prelude::*, rtc};
use tandem_rtc::test::MockRoom;

#[test_log::test]
fn nothing_is_wrapped_before_init() {
    assert_eq!(
        tandem::context().err(),
        Some(FacadeError::NotReady("tandem::init was not called"))
    );

    let room = MockRoom::new(Default::default());
    let error = tandem::wrap(rtc::RtcObject::Room(room.clone())).unwrap_err();
    assert!(matches!(error, FacadeError::NotReady(_)));
    assert_eq!(room.listener_count(), 0);
}
