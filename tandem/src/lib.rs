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

//! Facade over the `tandem-rtc` client object model.
//!
//! Every client object is exposed through exactly one facade entity, with the
//! facade's own enum names and UPPER_SNAKE_CASE event identifiers.

#[macro_use]
mod macros;

mod bridge;
mod context;
mod dispatch;
mod registry;
mod translate;

pub mod device;
pub mod enums;
pub mod error;
pub mod options;
pub mod participant;
pub mod publication;
pub mod room;
pub mod stats;
pub mod track;

pub mod rtc {
    pub use tandem_rtc::*;
}

pub use context::{context, init, wrap, Context, ContextOptions, Entity};
pub use tandem_rtc::{ObjectId, ParticipantIdentity, ParticipantSid, RoomSid, TrackSid};

/// `use tandem::prelude::*;` to import the facade types
pub mod prelude;
