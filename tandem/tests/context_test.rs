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

use anyhow::Result;
use tandem::{prelude::*, rtc};
use tandem_rtc::test::{MockClient, MockLocalTrack, MockRemoteTrack, MockRoom};
use tandem_rtc::Room as _;

mod common;

#[test_log::test(tokio::test)]
async fn disposed_contexts_refuse_to_wrap() -> Result<()> {
    let (ctx, client) = common::test_context();
    let (room, mock_room) = common::connected_room(&ctx, &client).await?;
    let mut events = room.subscribe();

    ctx.dispose();

    assert!(ctx.is_disposed());
    assert_eq!(ctx.wrapped_count(), 0);
    assert_eq!(mock_room.listener_count(), 0);
    assert!(matches!(ctx.create_room(RoomOptions::default()), Err(FacadeError::NotReady(_))));

    let upstream: Arc<dyn rtc::Track> =
        MockRemoteTrack::new(rtc::TrackKind::Audio, rtc::TrackSource::Microphone);
    assert!(matches!(ctx.wrap_track(&upstream), Err(FacadeError::NotReady(_))));

    mock_room.set_metadata("unseen");
    assert!(events.try_recv().is_err());
    assert_eq!(room.name(), mock_room.name());
    Ok(())
}

#[test_log::test(tokio::test)]
async fn disposed_contexts_do_not_resume_bridges() -> Result<()> {
    let (ctx, client) = common::test_context();
    let (room, mock_room) = common::connected_room(&ctx, &client).await?;
    let mock_track = MockLocalTrack::new(rtc::TrackKind::Audio, rtc::TrackSource::Microphone);
    let upstream: Arc<dyn rtc::Track> = mock_track.clone();
    let Track::LocalAudio(track) = ctx.wrap_track(&upstream)? else {
        panic!("expected a local audio track");
    };

    ctx.dispose();

    let reconnect = room.connect(common::URL, common::TOKEN, ConnectOptions::default()).await;
    assert!(matches!(reconnect, Err(FacadeError::NotReady(_))));
    assert_eq!(mock_room.listener_count(), 0);
    mock_room.add_remote_participant("bob");
    assert_eq!(ctx.wrapped_count(), 0);

    assert!(matches!(track.restart(None).await, Err(FacadeError::NotReady(_))));
    assert_eq!(mock_track.listener_count(), 0);
    Ok(())
}

#[test_log::test]
fn rooms_must_be_wrapped_before_lookup() -> Result<()> {
    let (ctx, _) = common::test_context();
    let upstream: Arc<dyn rtc::Room> = MockRoom::new(Default::default());

    let error = Room::from_instance(&ctx, &upstream).unwrap_err();
    assert!(matches!(error, FacadeError::NotFound(_)));

    let room = ctx.wrap_room(upstream.clone())?;
    assert_eq!(Room::from_instance(&ctx, &upstream)?, room);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn unmapped_features_fail_explicitly() -> Result<()> {
    let (ctx, client) = common::test_context();
    let (room, _) = common::connected_room(&ctx, &client).await?;
    let local = room.local_participant()?;

    let rpc = PerformRpcData {
        destination_identity: "bob".into(),
        method: "greet".to_owned(),
        payload: "hi".to_owned(),
    };
    assert_eq!(
        local.perform_rpc(rpc).await,
        Err(FacadeError::NotImplemented("LocalParticipant::perform_rpc"))
    );
    assert!(matches!(
        local.register_rpc_method("greet".to_owned(), |data| Ok(data.payload)),
        Err(FacadeError::NotImplemented(_))
    ));
    assert!(matches!(
        room.register_text_stream_handler("chat", |_, _| {}),
        Err(FacadeError::NotImplemented(_))
    ));
    assert!(matches!(
        room.register_byte_stream_handler("files", |_, _| {}),
        Err(FacadeError::NotImplemented(_))
    ));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn client_errors_pass_through_unchanged() -> Result<()> {
    let (ctx, client) = common::test_context();
    let (room, mock_room) = common::test_room(&ctx, &client)?;

    mock_room.fail_next_connect(rtc::RtcError::Connection("signal timeout".to_owned()));
    let error = room.connect(common::URL, common::TOKEN, ConnectOptions::default()).await;
    assert_eq!(error, Err(FacadeError::Rtc(rtc::RtcError::Connection("signal timeout".into()))));
    assert_eq!(error.unwrap_err().to_string(), "connection failed: signal timeout");

    client.fail_next_capture(rtc::RtcError::Device("camera busy".to_owned()));
    let options = CreateLocalTracksOptions { video: Some(Default::default()), audio: None };
    let error = ctx.create_local_tracks(options).await.unwrap_err();
    assert_eq!(error, FacadeError::Rtc(rtc::RtcError::Device("camera busy".into())));

    let local = room.local_participant()?;
    let error = local.publish_data(b"ping".to_vec(), Default::default()).await.unwrap_err();
    assert!(matches!(error, FacadeError::Rtc(rtc::RtcError::Connection(_))));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn local_participant_publishes_through_the_client() -> Result<()> {
    let (ctx, client) = common::test_context();
    let (room, mock_room) = common::connected_room(&ctx, &client).await?;
    let local = room.local_participant()?;
    let mut events = local.subscribe();

    let publication = local
        .set_camera_enabled(true, None)
        .await?
        .ok_or_else(|| anyhow::anyhow!("the camera was not published"))?;
    assert_eq!(publication.source(), TrackSource::Camera);
    assert_eq!(local.local_track_publications()?, vec![publication.clone()]);
    assert!(local.is_camera_enabled());

    local.set_camera_enabled(false, None).await?;
    assert!(publication.is_muted());

    local.publish_data(b"ping".to_vec(), DataPublishOptions::default()).await?;
    let (payload, options) = mock_room.local().sent_data().remove(0);
    assert_eq!(payload, b"ping");
    assert_eq!(options.kind, rtc::DataPacketKind::Reliable);

    let sid = publication.sid();
    let unpublished = local.unpublish_track(&sid, true).await?;
    assert_eq!(unpublished, publication);
    assert!(publication.local_track()?.map_or(false, |track| track.is_muted()));

    assert_eq!(
        common::names(&common::drain(&mut events), ParticipantEvent::name),
        vec!["LOCAL_TRACK_PUBLISHED", "TRACK_MUTED", "LOCAL_TRACK_UNPUBLISHED"]
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn devices_are_listed_with_facade_shapes() -> Result<()> {
    let (ctx, client) = common::test_context();
    client.add_device(rtc::MediaDeviceInfo {
        device_id: "cam-1".to_owned(),
        kind: rtc::MediaDeviceKind::VideoInput,
        label: "USB Camera".to_owned(),
        group_id: "usb".to_owned(),
    });

    let cameras = ctx.local_devices(Some(MediaDeviceKind::VideoInput), true).await?;
    assert_eq!(cameras.len(), 2);
    assert_eq!(cameras[1].label, "USB Camera");

    let hidden = ctx.local_devices(None, false).await?;
    assert_eq!(hidden.len(), 4);
    assert!(hidden.iter().all(|device| device.label.is_empty()));

    let json = serde_json::to_value(&cameras[0])?;
    assert_eq!(json["deviceId"], "cam-0");
    assert_eq!(json["kind"], "VIDEO_INPUT");
    Ok(())
}

#[test_log::test]
fn the_global_context_can_be_replaced() -> Result<()> {
    let first = tandem::init(MockClient::new(), ContextOptions::default());
    assert!(Arc::ptr_eq(&tandem::context()?, &first));

    let upstream: Arc<dyn rtc::Track> =
        MockRemoteTrack::new(rtc::TrackKind::Video, rtc::TrackSource::Camera);
    let Entity::Track(track) = tandem::wrap(rtc::RtcObject::Track(upstream.clone()))? else {
        panic!("a track must be wrapped as a track");
    };
    assert_eq!(first.wrap_track(&upstream)?, track);

    let second = tandem::init(MockClient::new(), ContextOptions::default());
    assert!(first.is_disposed());
    assert!(!second.is_disposed());
    assert!(Arc::ptr_eq(&tandem::context()?, &second));
    Ok(())
}
