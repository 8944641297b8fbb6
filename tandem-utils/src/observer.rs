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

use std::{
    fmt,
    pin::Pin,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use futures_util::{
    sink::Sink,
    task::{Context, Poll},
};
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Fan-out of owned events to any number of channel subscribers.
///
/// Each subscriber gets its own unbounded channel, so delivery order is the
/// dispatch order. Subscribers whose receiver was dropped are pruned on the
/// next dispatch.
#[derive(Debug)]
pub struct Dispatcher<T>
where
    T: Clone,
{
    senders: Mutex<Vec<mpsc::UnboundedSender<T>>>,
}

impl<T> Default for Dispatcher<T>
where
    T: Clone,
{
    fn default() -> Self {
        Self { senders: Default::default() }
    }
}

impl<T> Dispatcher<T>
where
    T: Clone,
{
    pub fn register(&self) -> mpsc::UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().push(tx);
        rx
    }

    pub fn dispatch(&self, msg: &T) {
        self.senders.lock().retain(|sender| sender.send(msg.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        let mut senders = self.senders.lock();
        senders.retain(|sender| !sender.is_closed());
        senders.len()
    }

    pub fn clear(&self) {
        self.senders.lock().clear();
    }
}

impl<T> Sink<T> for Dispatcher<T>
where
    T: Clone,
{
    type Error = ();

    fn poll_ready(self: Pin<&mut Self>, _: &mut Context) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(self: Pin<&mut Self>, item: T) -> Result<(), Self::Error> {
        self.dispatch(&item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }
}

/// Handle returned when registering a [`Listener`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Synchronous event callback, invoked on the emitting thread.
pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Ordered set of synchronous listeners.
///
/// `emit` snapshots the listeners before calling them, so a listener may add
/// or remove listeners (including itself) while it runs. Such changes take
/// effect from the next `emit`.
pub struct ListenerSet<E> {
    listeners: Mutex<Vec<(ListenerId, Listener<E>)>>,
}

impl<E> Default for ListenerSet<E> {
    fn default() -> Self {
        Self { listeners: Default::default() }
    }
}

impl<E> fmt::Debug for ListenerSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet").field("len", &self.len()).finish()
    }
}

impl<E> ListenerSet<E> {
    pub fn add(&self, listener: Listener<E>) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.lock().push((id, listener));
        id
    }

    /// The removed listener is dropped after the set is unlocked, so whatever
    /// it owns may use this set again from its destructor.
    pub fn remove(&self, id: ListenerId) -> bool {
        let removed = {
            let mut listeners = self.listeners.lock();
            let index = listeners.iter().position(|(listener_id, _)| *listener_id == id);
            index.map(|index| listeners.remove(index))
        };
        removed.is_some()
    }

    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> =
            self.listeners.lock().iter().map(|(_, listener)| listener.clone()).collect();

        for listener in snapshot {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.listeners.lock());
        drop(removed);
    }
}
