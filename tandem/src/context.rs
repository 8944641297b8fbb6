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

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use env_logger::Env;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use tandem_rtc as rtc;

use crate::{
    device::MediaDeviceInfo,
    dispatch,
    enums::MediaDeviceKind,
    error::{FacadeError, FacadeResult},
    options::{CreateLocalTracksOptions, RoomOptions, ScreenShareCaptureOptions},
    participant::{Participant, ParticipantInner},
    publication::{PublicationInner, TrackPublication},
    registry::IdentityRegistry,
    room::{Room, RoomInner},
    track::{LocalTrack, Track, TrackInner},
};

lazy_static! {
    static ref CONTEXT: RwLock<Option<Arc<Context>>> = RwLock::new(None);
}

#[derive(Clone, Debug)]
pub struct ContextOptions {
    /// Default `env_logger` filter, `RUST_LOG` takes precedence.
    pub log_filter: String,
    /// Log every translated event at trace level.
    pub trace_events: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self { log_filter: "info".to_owned(), trace_events: false }
    }
}

/// Facade entity of any category.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Room(Room),
    Participant(Participant),
    Track(Track),
    Publication(TrackPublication),
}

/// Owner of the client and of the identity registries.
///
/// Every facade keeps its context alive. Once disposed, a context refuses to
/// wrap anything.
pub struct Context {
    client: Arc<dyn rtc::RtcClient>,
    options: ContextOptions,
    pub(crate) rooms: IdentityRegistry<RoomInner>,
    pub(crate) participants: IdentityRegistry<ParticipantInner>,
    pub(crate) publications: IdentityRegistry<PublicationInner>,
    pub(crate) tracks: IdentityRegistry<TrackInner>,
    disposed: AtomicBool,
}

impl Context {
    pub fn new(client: Arc<dyn rtc::RtcClient>, options: ContextOptions) -> Arc<Self> {
        Arc::new(Self {
            client,
            options,
            rooms: IdentityRegistry::new("rooms"),
            participants: IdentityRegistry::new("participants"),
            publications: IdentityRegistry::new("publications"),
            tracks: IdentityRegistry::new("tracks"),
            disposed: AtomicBool::new(false),
        })
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    pub(crate) fn ensure_ready(&self) -> FacadeResult<()> {
        if self.is_disposed() {
            return Err(FacadeError::NotReady("the context was disposed"));
        }
        Ok(())
    }

    /// Returns the facade of `object`, creating it on first use.
    pub fn wrap(self: &Arc<Self>, object: rtc::RtcObject) -> FacadeResult<Entity> {
        self.ensure_ready()?;

        let category = dispatch::classify_object(&object)?;
        log::trace!("wrap {} ({}) as {:?}", object.class_name(), object.object_id(), category);

        Ok(match object {
            rtc::RtcObject::Room(room) => Entity::Room(Room::wrap(self, room)?),
            rtc::RtcObject::Participant(participant) => {
                Entity::Participant(Participant::wrap_any(self, &participant)?)
            }
            rtc::RtcObject::Track(track) => Entity::Track(Track::wrap_any(self, &track)?),
            rtc::RtcObject::Publication(publication) => {
                Entity::Publication(TrackPublication::wrap_any(self, &publication)?)
            }
            rtc::RtcObject::Other(_) => unreachable!(),
        })
    }

    pub fn wrap_room(self: &Arc<Self>, room: Arc<dyn rtc::Room>) -> FacadeResult<Room> {
        Room::wrap(self, room)
    }

    pub fn wrap_participant(
        self: &Arc<Self>,
        participant: &Arc<dyn rtc::Participant>,
    ) -> FacadeResult<Participant> {
        Participant::wrap_any(self, participant)
    }

    pub fn wrap_track(self: &Arc<Self>, track: &Arc<dyn rtc::Track>) -> FacadeResult<Track> {
        Track::wrap_any(self, track)
    }

    pub fn wrap_publication(
        self: &Arc<Self>,
        publication: &Arc<dyn rtc::TrackPublication>,
    ) -> FacadeResult<TrackPublication> {
        TrackPublication::wrap_any(self, publication)
    }

    pub fn create_room(self: &Arc<Self>, options: RoomOptions) -> FacadeResult<Room> {
        self.ensure_ready()?;
        let room = self.client.create_room(options.into())?;
        Room::wrap(self, room)
    }

    pub async fn create_local_tracks(
        self: &Arc<Self>,
        options: CreateLocalTracksOptions,
    ) -> FacadeResult<Vec<LocalTrack>> {
        self.ensure_ready()?;
        let tracks = self.client.create_local_tracks(options.into()).await?;
        tracks.into_iter().map(|track| LocalTrack::wrap(self, track)).collect()
    }

    pub async fn create_local_screen_tracks(
        self: &Arc<Self>,
        options: ScreenShareCaptureOptions,
    ) -> FacadeResult<Vec<LocalTrack>> {
        self.ensure_ready()?;
        let tracks = self.client.create_local_screen_tracks(options).await?;
        tracks.into_iter().map(|track| LocalTrack::wrap(self, track)).collect()
    }

    /// Lists the media devices of `kind`, or all of them.
    pub async fn local_devices(
        &self,
        kind: Option<MediaDeviceKind>,
        request_permissions: bool,
    ) -> FacadeResult<Vec<MediaDeviceInfo>> {
        let devices =
            self.client.enumerate_devices(kind.map(Into::into), request_permissions).await?;
        Ok(devices.into_iter().map(Into::into).collect())
    }

    /// Number of live facades across all categories.
    pub fn wrapped_count(&self) -> usize {
        self.rooms.len() + self.participants.len() + self.publications.len() + self.tracks.len()
    }

    /// Detaches every facade from its client object and forgets them all.
    ///
    /// Facades still held by the application keep answering getters but no
    /// longer receive events.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        let rooms = self.rooms.drain();
        let participants = self.participants.drain();
        let publications = self.publications.drain();
        let tracks = self.tracks.drain();
        log::debug!(
            "disposing {} rooms, {} participants, {} publications, {} tracks",
            rooms.len(),
            participants.len(),
            publications.len(),
            tracks.len()
        );

        rooms.iter().for_each(|room| room.close());
        participants.iter().for_each(|participant| participant.close());
        publications.iter().for_each(|publication| publication.close());
        tracks.iter().for_each(|track| track.close());
    }
}

/// Installs the process-wide context and the logger.
///
/// Calling `init` again replaces the context and disposes the previous one.
pub fn init(client: Arc<dyn rtc::RtcClient>, options: ContextOptions) -> Arc<Context> {
    let env = Env::default().default_filter_or(options.log_filter.clone());
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("a logger is already installed");
    }

    let ctx = Context::new(client, options);
    let previous = CONTEXT.write().replace(ctx.clone());
    if let Some(previous) = previous {
        previous.dispose();
    }
    ctx
}

pub fn context() -> FacadeResult<Arc<Context>> {
    CONTEXT.read().clone().ok_or(FacadeError::NotReady("tandem::init was not called"))
}

/// Wraps `object` through the process-wide context.
pub fn wrap(object: rtc::RtcObject) -> FacadeResult<Entity> {
    context()?.wrap(object)
}
