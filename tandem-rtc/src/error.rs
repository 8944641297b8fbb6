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

use thiserror::Error;

/// Failure reported by the client for any delegated operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtcError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("device error: {0}")]
    Device(String),
    #[error("track error: {0}")]
    Track(String),
    #[error("publish failed: {0}")]
    Publish(String),
    #[error("operation cancelled")]
    Cancelled,
    #[error("operation timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

pub type RtcResult<T> = Result<T, RtcError>;
