// Copyright 2025 eraflo
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

//! End-to-end scans against the fake renderer: coverage, tick counts, and
//! the final warped image.

mod common;

use common::{init_logging, FakeProvider};
use pano_rig::capture::warp::arctan_source_row;
use pano_rig::{
    CaptureScheduler, Eye, Half, LogicalCamera, RigConfig, RigTransform, TickOutcome,
};

fn test_config() -> RigConfig {
    RigConfig {
        texture_size: 64,
        lane_count: 8,
        ..RigConfig::default()
    }
}

/// The color a (camera, column) capture is scripted to render.
fn strip_color(camera: &LogicalCamera, column: u32, lane_count: u32) -> [u8; 3] {
    [camera.ordinal(lane_count) as u8 + 1, column as u8 + 1, 0]
}

/// The camera whose band contains output pixel `(x, y)` before the warp,
/// and the column that wrote it.
fn band_camera(x: u32, y: u32, config: &RigConfig) -> (LogicalCamera, u32) {
    let eye = if y < config.texture_size / 2 {
        Eye::Left
    } else {
        Eye::Right
    };
    let half = if y % (config.texture_size / 2) < config.texture_size / 4 {
        Half::Upper
    } else {
        Half::Lower
    };
    let lane = x / config.columns_per_lane();
    let column = x % config.columns_per_lane();
    (LogicalCamera { eye, half, lane }, column)
}

#[test]
fn full_scan_takes_columns_per_lane_ticks_and_covers_every_column() {
    init_logging();
    let config = test_config();
    let mut provider = FakeProvider::default();
    let mut scheduler = CaptureScheduler::new(config, &mut provider).unwrap();
    let rig = RigTransform::default();

    assert!(scheduler.start_render());

    let mut completed_ticks = 0;
    while !scheduler.is_finished() {
        assert_eq!(scheduler.tick(&rig), TickOutcome::CaptureRequested);
        let column = scheduler.current_column() as u32;
        for (index, state) in provider.surfaces.iter().enumerate() {
            let camera: LogicalCamera = LogicalCamera::all(config.lane_count)
                .nth(index)
                .unwrap();
            state.borrow_mut().color = strip_color(&camera, column, config.lane_count);
        }
        scheduler.complete_frame();
        completed_ticks += 1;
        assert!(completed_ticks <= config.columns_per_lane(), "scan overran");
    }

    // Exactly texture_size / lane_count ticks.
    assert_eq!(completed_ticks, config.columns_per_lane());

    // Every pixel of the warped output traces back to the strip that was
    // composited into its source row: full coverage, nothing missed or
    // double-written.
    let image = scheduler.image();
    let half_height = config.texture_size / 2;
    for y in 0..config.texture_size {
        let eye_base = (y / half_height) * half_height;
        let source_y = eye_base + arctan_source_row(y % half_height, half_height);
        for x in 0..config.texture_size {
            let (camera, column) = band_camera(x, source_y, &config);
            assert_eq!(
                image.pixel(x, y),
                strip_color(&camera, column, config.lane_count),
                "pixel ({x}, {y}) sourced from row {source_y}"
            );
        }
    }
}

#[test]
fn scan_leaves_surfaces_attached_until_the_next_idle_tick() {
    init_logging();
    let config = test_config();
    let mut provider = FakeProvider::default();
    let mut scheduler = CaptureScheduler::new(config, &mut provider).unwrap();
    let rig = RigTransform::default();

    scheduler.start_render();
    while !scheduler.is_finished() {
        scheduler.tick(&rig);
        scheduler.complete_frame();
    }
    // The final completion warps and goes idle but leaves detaching to the
    // next tick.
    assert!(provider.all_attached());
    assert_eq!(scheduler.tick(&rig), TickOutcome::Idle);
    assert!(provider.all_detached());
}

#[test]
fn every_camera_is_posed_every_tick() {
    init_logging();
    let config = test_config();
    let mut provider = FakeProvider::default();
    let mut scheduler = CaptureScheduler::new(config, &mut provider).unwrap();
    let rig = RigTransform::default();

    scheduler.start_render();
    scheduler.tick(&rig);
    let first_poses: Vec<_> = provider
        .surfaces
        .iter()
        .map(|s| s.borrow().pose.expect("camera posed"))
        .collect();

    scheduler.complete_frame();
    scheduler.tick(&rig);
    for (state, first) in provider.surfaces.iter().zip(&first_poses) {
        let second = state.borrow().pose.expect("camera reposed");
        // The sweep advanced one angular sub-step, so every pose moved.
        assert_ne!(second.0, first.0, "position advanced");
    }
}

#[test]
fn take_image_resets_the_output_buffer() {
    init_logging();
    let config = test_config();
    let mut provider = FakeProvider::default();
    let mut scheduler = CaptureScheduler::new(config, &mut provider).unwrap();
    let rig = RigTransform::default();

    scheduler.start_render();
    while !scheduler.is_finished() {
        scheduler.tick(&rig);
        for state in &provider.surfaces {
            state.borrow_mut().color = [9, 9, 9];
        }
        scheduler.complete_frame();
    }

    let image = scheduler.take_image();
    assert!(image.as_bytes().iter().any(|&b| b != 0));
    assert!(scheduler.image().as_bytes().iter().all(|&b| b == 0));
    assert_eq!(image.width(), config.texture_size);
    assert_eq!(image.height(), config.texture_size);
}
