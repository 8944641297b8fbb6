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

use std::{collections::HashMap, sync::Arc};

use tandem_rtc::{self as rtc, ParticipantIdentity, ParticipantSid, TrackSid};
use tokio::sync::mpsc;

use super::{
    Participant, ParticipantEvent, ParticipantInner, PerformRpcData, RpcInvocationData,
};
use crate::{
    context::Context,
    dispatch::ParticipantClass,
    enums::*,
    error::{FacadeError, FacadeResult},
    options::{
        AudioCaptureOptions, DataPublishOptions, ScreenShareCaptureOptions, TrackPermission,
        TrackPublishOptions, VideoCaptureOptions,
    },
    publication::{LocalTrackPublication, TrackPublication},
    track::LocalTrack,
};

facade_handle!(
    /// The participant connected through this client.
    LocalParticipant => ParticipantInner
);

impl LocalParticipant {
    participant_methods!();

    pub async fn publish_track(
        &self,
        track: LocalTrack,
        options: TrackPublishOptions,
    ) -> FacadeResult<LocalTrackPublication> {
        let publication =
            self.inner.local().publish_track(track.upstream(), options.into()).await?;
        LocalTrackPublication::wrap(&self.inner.ctx, publication)
    }

    pub async fn unpublish_track(
        &self,
        sid: &TrackSid,
        stop_on_unpublish: bool,
    ) -> FacadeResult<LocalTrackPublication> {
        let publication = self.inner.local().unpublish_track(sid, stop_on_unpublish).await?;
        LocalTrackPublication::wrap(&self.inner.ctx, publication)
    }

    /// Enables or disables the camera, capturing and publishing a track on first use.
    pub async fn set_camera_enabled(
        &self,
        enabled: bool,
        options: Option<VideoCaptureOptions>,
    ) -> FacadeResult<Option<LocalTrackPublication>> {
        let options = options.map(Into::into);
        let publication = self.inner.local().set_camera_enabled(enabled, options).await?;
        self.wrap_publication(publication)
    }

    pub async fn set_microphone_enabled(
        &self,
        enabled: bool,
        options: Option<AudioCaptureOptions>,
    ) -> FacadeResult<Option<LocalTrackPublication>> {
        let publication = self.inner.local().set_microphone_enabled(enabled, options).await?;
        self.wrap_publication(publication)
    }

    pub async fn set_screen_share_enabled(
        &self,
        enabled: bool,
        options: Option<ScreenShareCaptureOptions>,
    ) -> FacadeResult<Option<LocalTrackPublication>> {
        let publication = self.inner.local().set_screen_share_enabled(enabled, options).await?;
        self.wrap_publication(publication)
    }

    pub async fn publish_data(
        &self,
        payload: Vec<u8>,
        options: DataPublishOptions,
    ) -> FacadeResult<()> {
        Ok(self.inner.local().publish_data(payload, options.into()).await?)
    }

    pub async fn set_metadata(&self, metadata: String) -> FacadeResult<()> {
        Ok(self.inner.local().set_metadata(metadata).await?)
    }

    pub async fn set_name(&self, name: String) -> FacadeResult<()> {
        Ok(self.inner.local().set_name(name).await?)
    }

    pub async fn set_attributes(&self, attributes: HashMap<String, String>) -> FacadeResult<()> {
        Ok(self.inner.local().set_attributes(attributes).await?)
    }

    pub fn set_track_subscription_permissions(
        &self,
        all_participants_allowed: bool,
        permissions: Vec<TrackPermission>,
    ) {
        self.inner.local().set_track_subscription_permissions(all_participants_allowed, permissions)
    }

    pub fn local_track_publications(&self) -> FacadeResult<Vec<LocalTrackPublication>> {
        self.inner
            .local()
            .local_track_publications()
            .into_iter()
            .map(|publication| LocalTrackPublication::wrap(&self.inner.ctx, publication))
            .collect()
    }

    pub async fn perform_rpc(&self, _data: PerformRpcData) -> FacadeResult<String> {
        Err(FacadeError::NotImplemented("LocalParticipant::perform_rpc"))
    }

    pub fn register_rpc_method<F>(&self, _method: String, _handler: F) -> FacadeResult<()>
    where
        F: Fn(RpcInvocationData) -> Result<String, String> + Send + Sync + 'static,
    {
        Err(FacadeError::NotImplemented("LocalParticipant::register_rpc_method"))
    }

    pub(crate) fn wrap(
        ctx: &Arc<Context>,
        participant: Arc<dyn rtc::LocalParticipant>,
    ) -> FacadeResult<Self> {
        let variant = rtc::ParticipantVariant::Local(participant);
        Ok(Participant::wrap(ctx, variant)?.try_into()?)
    }

    fn wrap_publication(
        &self,
        publication: Option<Arc<dyn rtc::LocalTrackPublication>>,
    ) -> FacadeResult<Option<LocalTrackPublication>> {
        publication
            .map(|publication| LocalTrackPublication::wrap(&self.inner.ctx, publication))
            .transpose()
    }
}
