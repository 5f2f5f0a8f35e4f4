// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fv_core::{Frame, FrameStatus};

use super::*;

#[yare::parameterized(
    queued = { FrameStatus::Queued, None,                                      None },
    busy   = { FrameStatus::Dispatched, Some("http://farm:8000/log_7_3.log"),  None },
    done   = { FrameStatus::Done, Some("http://farm:8000/log_7_3.log"),        Some("http://farm:8000/render_7_3.exr") },
)]
fn urls_follow_frame_status(status: FrameStatus, log: Option<&str>, result: Option<&str>) {
    let job = JobId::new("7");
    let frame = Frame::builder().number(3).status(status).build();
    let urls = FrameUrls::new("http://farm:8000", &job, FrameLinks::for_frame(&job, &frame));

    assert_eq!(urls.log.as_deref(), log);
    assert_eq!(urls.result.as_deref(), result);
    assert_eq!(urls.thumbnail, "http://farm:8000/thumb_7_3.jpg");
    assert_eq!(urls.archive, "http://farm:8000/result_7.zip");
}
