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

//! Pure camera-rig geometry: maps a logical camera and a scan position to
//! a world-space camera pose.
//!
//! A cube map cannot produce a stereo panorama, because the eyes do not
//! swivel in their sockets; they orbit a central point, so the eye origin
//! differs for every vertical column of the output image. The rig
//! therefore re-poses each lane's cameras every tick, one angular
//! sub-step at a time, until lane angle plus column angle have swept the
//! full rotation.

use serde::{Deserialize, Serialize};

use super::camera::{Eye, Half, LogicalCamera};
use super::config::RigConfig;
use crate::math::{Quaternion, Vec3, FRAC_PI_4, PI, TAU};

/// The world-space transform of the rig's viewpoint, sampled from the host
/// node every tick. Moving the host node moves the panorama's viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RigTransform {
    /// World-space position of the viewpoint.
    pub position: Vec3,
    /// World-space orientation of the viewpoint.
    pub orientation: Quaternion,
}

/// A world-space camera pose produced by [`camera_pose`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space position of the virtual camera.
    pub position: Vec3,
    /// World-space orientation of the virtual camera.
    pub orientation: Quaternion,
}

/// Computes the pose of one logical camera at one scan column.
///
/// Deterministic and stateless: identical inputs yield bit-identical
/// poses, and any input combination yields a valid transform.
///
/// The camera sits on a horizontal circle of radius `eye_separation`
/// around the rig center, the two eyes on opposite sides of it (the
/// stereo baseline). The orientation starts from the rig's own, yaws by
/// `-π + angle` about the local vertical axis, then pitches by a quarter
/// turn halved: up for the upper tile, down for the lower one, so the two
/// stitched 90° captures cover the full vertical extent.
pub fn camera_pose(
    camera: LogicalCamera,
    column: u32,
    config: &RigConfig,
    rig: &RigTransform,
) -> CameraPose {
    let lane_count = config.lane_count as f32;
    let sector = TAU / lane_count;

    let lane_angle = (lane_count - camera.lane as f32) * sector;
    let column_angle = (lane_count - column as f32) / config.columns_per_lane() as f32 * sector
        + config.start_phase.offset();
    let angle = lane_angle + column_angle;

    let radial = Vec3::new(-angle.cos(), 0.0, angle.sin()) * config.eye_separation;
    let offset = match camera.eye {
        Eye::Left => radial,
        Eye::Right => -radial,
    };

    let yaw = Quaternion::from_axis_angle(Vec3::Y, -PI + angle);
    let pitch = match camera.half {
        Half::Upper => Quaternion::from_axis_angle(Vec3::X, -FRAC_PI_4),
        Half::Lower => Quaternion::from_axis_angle(Vec3::X, FRAC_PI_4),
    };

    CameraPose {
        position: rig.position + rig.orientation * offset,
        orientation: (rig.orientation * yaw * pitch).normalize(),
    }
}
