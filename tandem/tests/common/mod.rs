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

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tandem::prelude::*;
use tandem_rtc::test::{MockClient, MockRoom};
use tokio::sync::mpsc;

pub const URL: &str = "ws://localhost:7880";
pub const TOKEN: &str = "token";

pub fn test_context() -> (Arc<Context>, Arc<MockClient>) {
    let client = MockClient::new();
    let options = ContextOptions { trace_events: true, ..Default::default() };
    (Context::new(client.clone(), options), client)
}

/// A room created through the facade, and its client counterpart.
pub fn test_room(ctx: &Arc<Context>, client: &MockClient) -> Result<(Room, Arc<MockRoom>)> {
    let room = ctx.create_room(RoomOptions::default())?;
    let mock = client.last_room().ok_or_else(|| anyhow!("no room was created"))?;
    Ok((room, mock))
}

pub async fn connected_room(
    ctx: &Arc<Context>,
    client: &MockClient,
) -> Result<(Room, Arc<MockRoom>)> {
    let (room, mock) = test_room(ctx, client)?;
    room.connect(URL, TOKEN, ConnectOptions::default()).await?;
    Ok((room, mock))
}

/// Every event received so far, without waiting.
pub fn drain<T>(events: &mut mpsc::UnboundedReceiver<T>) -> Vec<T> {
    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    received
}

pub fn names<E>(events: &[E], name: impl Fn(&E) -> &'static str) -> Vec<&'static str> {
    events.iter().map(name).collect()
}
