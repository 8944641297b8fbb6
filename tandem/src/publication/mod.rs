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

use std::sync::Arc;

use tandem_rtc::{self as rtc, ObjectId, TrackSid};
use tandem_utils::{enum_dispatch, observer::Dispatcher};
use tokio::sync::mpsc;

use crate::{
    bridge::{self, Bridge, FacadeEvent},
    context::Context,
    dispatch::{self, PublicationClass},
    enums::*,
    error::{ClassificationError, FacadeResult},
    options::TrackDimensions,
    track::Track,
};

macro_rules! publication_methods {
    () => {
        pub fn sid(&self) -> TrackSid {
            self.inner.instance.sid()
        }

        pub fn name(&self) -> String {
            self.inner.instance.name()
        }

        pub fn kind(&self) -> TrackKind {
            $crate::translate::known_track_kind(self.inner.instance.kind())
        }

        pub fn source(&self) -> TrackSource {
            self.inner.instance.source().into()
        }

        pub fn mime_type(&self) -> String {
            self.inner.instance.mime_type()
        }

        pub fn dimensions(&self) -> Option<TrackDimensions> {
            self.inner.instance.dimensions()
        }

        pub fn is_simulcasted(&self) -> bool {
            self.inner.instance.is_simulcasted()
        }

        pub fn is_muted(&self) -> bool {
            self.inner.instance.is_muted()
        }

        pub fn is_subscribed(&self) -> bool {
            self.inner.instance.is_subscribed()
        }

        pub fn is_enabled(&self) -> bool {
            self.inner.instance.is_enabled()
        }

        pub fn is_local(&self) -> bool {
            self.inner.class == PublicationClass::Local
        }

        pub fn encryption_type(&self) -> EncryptionType {
            self.inner.instance.encryption_type().into()
        }

        pub fn audio_features(&self) -> Vec<AudioTrackFeature> {
            self.inner.instance.audio_features().into_iter().map(Into::into).collect()
        }

        pub fn track(&self) -> FacadeResult<Option<Track>> {
            self.inner
                .instance
                .track()
                .map(|track| Track::wrap_any(&self.inner.ctx, &track))
                .transpose()
        }

        pub fn subscribe(&self) -> mpsc::UnboundedReceiver<PublicationEvent> {
            self.inner.dispatcher.register()
        }
    };
}

mod local;
mod remote;

pub use local::*;
pub use remote::*;

#[derive(Debug, Clone, PartialEq)]
pub enum PublicationEvent {
    Muted,
    Unmuted,
    Ended,
    UpstreamPaused,
    UpstreamResumed,
    Subscribed(Track),
    Unsubscribed(Track),
    SubscriptionFailed(SubscriptionError),
    SubscriptionStatusChanged { status: SubscriptionStatus, previous: SubscriptionStatus },
    SubscriptionPermissionChanged { status: PermissionStatus, previous: PermissionStatus },
}

impl PublicationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Muted => "MUTED",
            Self::Unmuted => "UNMUTED",
            Self::Ended => "ENDED",
            Self::UpstreamPaused => "UPSTREAM_PAUSED",
            Self::UpstreamResumed => "UPSTREAM_RESUMED",
            Self::Subscribed(_) => "SUBSCRIBED",
            Self::Unsubscribed(_) => "UNSUBSCRIBED",
            Self::SubscriptionFailed(_) => "SUBSCRIPTION_FAILED",
            Self::SubscriptionStatusChanged { .. } => "SUBSCRIPTION_STATUS_CHANGED",
            Self::SubscriptionPermissionChanged { .. } => "SUBSCRIPTION_PERMISSION_CHANGED",
        }
    }

    fn translate(ctx: &Arc<Context>, event: &rtc::PublicationEvent) -> FacadeResult<Self> {
        Ok(match event {
            rtc::PublicationEvent::Muted => Self::Muted,
            rtc::PublicationEvent::Unmuted => Self::Unmuted,
            rtc::PublicationEvent::Ended => Self::Ended,
            rtc::PublicationEvent::UpstreamPaused => Self::UpstreamPaused,
            rtc::PublicationEvent::UpstreamResumed => Self::UpstreamResumed,
            rtc::PublicationEvent::Subscribed(track) => {
                Self::Subscribed(Track::wrap_any(ctx, track)?)
            }
            rtc::PublicationEvent::Unsubscribed(track) => {
                Self::Unsubscribed(Track::wrap_any(ctx, track)?)
            }
            rtc::PublicationEvent::SubscriptionFailed(error) => {
                Self::SubscriptionFailed((*error).into())
            }
            rtc::PublicationEvent::SubscriptionStatusChanged { status, previous } => {
                Self::SubscriptionStatusChanged {
                    status: (*status).into(),
                    previous: (*previous).into(),
                }
            }
            rtc::PublicationEvent::SubscriptionPermissionChanged { status, previous } => {
                Self::SubscriptionPermissionChanged {
                    status: (*status).into(),
                    previous: (*previous).into(),
                }
            }
        })
    }
}

impl FacadeEvent for PublicationEvent {
    fn name(&self) -> &'static str {
        PublicationEvent::name(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackPublication {
    Local(LocalTrackPublication),
    Remote(RemoteTrackPublication),
}

impl TrackPublication {
    enum_dispatch!(
        [Local, Remote];
        pub fn object_id(self: &Self) -> ObjectId;
        pub fn sid(self: &Self) -> TrackSid;
        pub fn name(self: &Self) -> String;
        pub fn kind(self: &Self) -> TrackKind;
        pub fn source(self: &Self) -> TrackSource;
        pub fn mime_type(self: &Self) -> String;
        pub fn dimensions(self: &Self) -> Option<TrackDimensions>;
        pub fn is_simulcasted(self: &Self) -> bool;
        pub fn is_muted(self: &Self) -> bool;
        pub fn is_subscribed(self: &Self) -> bool;
        pub fn is_enabled(self: &Self) -> bool;
        pub fn is_local(self: &Self) -> bool;
        pub fn encryption_type(self: &Self) -> EncryptionType;
        pub fn audio_features(self: &Self) -> Vec<AudioTrackFeature>;
        pub fn track(self: &Self) -> FacadeResult<Option<Track>>;
        pub fn subscribe(self: &Self) -> mpsc::UnboundedReceiver<PublicationEvent>;
    );

    /// Returns the facade of `publication`, creating it on first use.
    pub(crate) fn wrap(
        ctx: &Arc<Context>,
        publication: rtc::PublicationVariant,
    ) -> FacadeResult<Self> {
        ctx.ensure_ready()?;

        let id = publication.object_id();
        let inner = ctx.publications.get_or_try_insert_with(id, || -> FacadeResult<_> {
            let class = dispatch::classify_publication(&publication)?;
            log::debug!("wrapping {} ({}) as {:?}", publication.class_name(), id, class);
            Ok(Arc::new(PublicationInner {
                ctx: ctx.clone(),
                id,
                class,
                instance: publication.clone(),
                dispatcher: Default::default(),
                bridge: Default::default(),
            }))
        })?;

        inner.attach();
        Ok(Self::from_inner(inner))
    }

    pub(crate) fn wrap_any(
        ctx: &Arc<Context>,
        publication: &Arc<dyn rtc::TrackPublication>,
    ) -> FacadeResult<Self> {
        Self::wrap(ctx, publication.clone().variant())
    }

    fn from_inner(inner: Arc<PublicationInner>) -> Self {
        match inner.class {
            PublicationClass::Local => Self::Local(LocalTrackPublication::from_inner(inner)),
            PublicationClass::Remote => Self::Remote(RemoteTrackPublication::from_inner(inner)),
        }
    }

    pub(crate) fn inner(&self) -> &Arc<PublicationInner> {
        match self {
            Self::Local(publication) => &publication.inner,
            Self::Remote(publication) => &publication.inner,
        }
    }

    fn unexpected(&self, expected: &'static str) -> ClassificationError {
        let inner = self.inner();
        ClassificationError::UnexpectedVariant {
            id: inner.id,
            class_name: inner.instance.class_name(),
            expected,
        }
    }
}

impl From<LocalTrackPublication> for TrackPublication {
    fn from(publication: LocalTrackPublication) -> Self {
        Self::Local(publication)
    }
}

impl From<RemoteTrackPublication> for TrackPublication {
    fn from(publication: RemoteTrackPublication) -> Self {
        Self::Remote(publication)
    }
}

impl TryFrom<TrackPublication> for LocalTrackPublication {
    type Error = ClassificationError;

    fn try_from(publication: TrackPublication) -> Result<Self, Self::Error> {
        match publication {
            TrackPublication::Local(publication) => Ok(publication),
            other => Err(other.unexpected("local track publication")),
        }
    }
}

impl TryFrom<TrackPublication> for RemoteTrackPublication {
    type Error = ClassificationError;

    fn try_from(publication: TrackPublication) -> Result<Self, Self::Error> {
        match publication {
            TrackPublication::Remote(publication) => Ok(publication),
            other => Err(other.unexpected("remote track publication")),
        }
    }
}

pub(crate) struct PublicationInner {
    ctx: Arc<Context>,
    id: ObjectId,
    class: PublicationClass,
    instance: rtc::PublicationVariant,
    dispatcher: Dispatcher<PublicationEvent>,
    bridge: Bridge,
}

impl PublicationInner {
    fn local(&self) -> &Arc<dyn rtc::LocalTrackPublication> {
        match &self.instance {
            rtc::PublicationVariant::Local(publication) => publication,
            rtc::PublicationVariant::Remote(_) => unreachable!(),
        }
    }

    fn remote(&self) -> &Arc<dyn rtc::RemoteTrackPublication> {
        match &self.instance {
            rtc::PublicationVariant::Remote(publication) => publication,
            rtc::PublicationVariant::Local(_) => unreachable!(),
        }
    }

    /// The listener keeps this facade alive until the bridge is detached.
    fn attach(self: &Arc<Self>) {
        let inner = self.clone();
        let attached = self.bridge.attach(|| {
            self.instance.add_listener(Arc::new(move |event| inner.on_event(event)))
        });

        if attached {
            log::debug!("publication {} attached", self.id);
        }
    }

    fn on_event(&self, event: &rtc::PublicationEvent) {
        let translated = PublicationEvent::translate(&self.ctx, event);
        bridge::forward(&self.ctx, ("publication", self.id), translated, &self.dispatcher);

        if let rtc::PublicationEvent::Ended = event {
            self.teardown();
        }
    }

    /// Called once the publication was removed from its participant.
    pub(crate) fn teardown(&self) {
        if self.bridge.detach(|id| self.instance.remove_listener(id)) {
            log::debug!("publication {} detached", self.id);
        }
    }

    pub(crate) fn close(&self) {
        self.teardown();
        self.dispatcher.clear();
    }
}

impl Drop for PublicationInner {
    fn drop(&mut self) {
        self.ctx.publications.purge(self.id);
    }
}
