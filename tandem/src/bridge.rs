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

//! Wiring of client listeners to facade dispatchers.
//!
//! Every facade entity registers one listener on its client object. The
//! listener translates each event synchronously and hands it to the entity's
//! [`Dispatcher`], so subscribers observe the client's order. The listener owns
//! the entity: an attached facade lives as long as its client object reports
//! to it, whether or not the application still holds a handle. Detaching the
//! bridge releases it.

use std::fmt;

use parking_lot::Mutex;
use tandem_rtc::{ListenerId, ObjectId};
use tandem_utils::observer::Dispatcher;

use crate::{context::Context, error::FacadeResult};

pub(crate) trait FacadeEvent: Clone + fmt::Debug {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BridgeState {
    Idle,
    Attached(ListenerId),
    TornDown,
}

/// Listener registration of one entity.
///
/// A bridge attaches once. After a teardown it stays detached unless it is
/// explicitly reattached.
#[derive(Debug)]
pub(crate) struct Bridge {
    state: Mutex<BridgeState>,
}

impl Default for Bridge {
    fn default() -> Self {
        Self { state: Mutex::new(BridgeState::Idle) }
    }
}

impl Bridge {
    /// Attaches if this bridge was never attached before.
    pub fn attach(&self, add_listener: impl FnOnce() -> ListenerId) -> bool {
        let mut state = self.state.lock();
        if *state != BridgeState::Idle {
            return false;
        }
        *state = BridgeState::Attached(add_listener());
        true
    }

    /// Attaches unless already attached, including after a teardown.
    pub fn reattach(&self, add_listener: impl FnOnce() -> ListenerId) -> bool {
        let mut state = self.state.lock();
        if let BridgeState::Attached(_) = *state {
            return false;
        }
        *state = BridgeState::Attached(add_listener());
        true
    }

    pub fn detach(&self, remove_listener: impl FnOnce(ListenerId) -> bool) -> bool {
        let mut state = self.state.lock();
        let previous = std::mem::replace(&mut *state, BridgeState::TornDown);
        match previous {
            BridgeState::Attached(id) => remove_listener(id),
            _ => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(*self.state.lock(), BridgeState::Attached(_))
    }
}

/// Dispatches a translated event, or panics if the translation failed.
///
/// A failure here means the client handed out an object or value the facade
/// cannot represent, which is a defect that must surface where it happens.
pub(crate) fn forward<E: FacadeEvent>(
    ctx: &Context,
    origin: (&'static str, ObjectId),
    translated: FacadeResult<E>,
    dispatcher: &Dispatcher<E>,
) {
    let (category, id) = origin;
    match translated {
        Ok(event) => {
            if ctx.options().trace_events {
                log::trace!("{} ({}) emits {}: {:?}", category, id, event.name(), event);
            }
            dispatcher.dispatch(&event);
        }
        Err(err) => {
            log::error!("failed to translate an event of {} ({}): {}", category, id, err);
            panic!("failed to translate an event of {} ({}): {}", category, id, err);
        }
    }
}
