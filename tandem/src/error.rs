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

use tandem_rtc::{ObjectId, RtcError};
use thiserror::Error;

pub type FacadeResult<T> = Result<T, FacadeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacadeError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Untranslatable(#[from] UntranslatableEnumValue),
    #[error("the facade is not ready: {0}")]
    NotReady(&'static str),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    #[error(transparent)]
    Rtc(#[from] RtcError),
}

/// The concrete facade type of an object could not be determined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    #[error("{class_name} ({id}) is not a room, participant, track or publication")]
    UnrecognizedCategory { id: ObjectId, class_name: &'static str },
    #[error("{class_name} ({id}) has an unsupported track kind: {kind}")]
    UnsupportedTrackKind { id: ObjectId, class_name: &'static str, kind: &'static str },
    #[error("{class_name} ({id}) reports is_local={is_local} but has the opposite runtime type")]
    InconsistentParticipant { id: ObjectId, class_name: &'static str, is_local: bool },
    #[error("expected a {expected}, got {class_name} ({id})")]
    UnexpectedVariant { id: ObjectId, class_name: &'static str, expected: &'static str },
}

/// A value has no counterpart in the target enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value:?} is not a valid {domain}")]
pub struct UntranslatableEnumValue {
    pub domain: &'static str,
    pub value: String,
}

impl UntranslatableEnumValue {
    pub fn new(domain: &'static str, value: impl Into<String>) -> Self {
        Self { domain, value: value.into() }
    }
}
