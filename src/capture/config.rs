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

//! The fixed-at-construction configuration of the capture rig.

use serde::{Deserialize, Serialize};

use super::error::CaptureError;
use super::warp::WarpMode;
use crate::math::PI;

/// Which angular sub-step of a lane the sweep starts at.
///
/// Both phases produce a complete panorama; they differ only in which
/// column of each lane is captured first, which rotates the seam of the
/// finished image by one lane sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartPhase {
    /// Start at the lane's natural first column.
    #[default]
    Standard,
    /// Offset the column angle by half a turn, flipping the starting column.
    Flipped,
}

impl StartPhase {
    /// The angular offset this phase adds to every column angle.
    #[inline]
    pub fn offset(&self) -> f32 {
        match self {
            StartPhase::Standard => 0.0,
            StartPhase::Flipped => PI,
        }
    }
}

/// Configuration of the capture rig, fixed when the scheduler is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    /// Side length of the square output buffer, in pixels.
    pub texture_size: u32,
    /// Number of angular lanes tiling the full 360° rotation.
    pub lane_count: u32,
    /// Half the interpupillary distance, in world units.
    pub eye_separation: f32,
    /// Near clip plane shared by every virtual camera.
    pub near_clip: f32,
    /// Far clip plane shared by every virtual camera.
    pub far_clip: f32,
    /// Scene-visibility mask shared by every virtual camera.
    pub cull_mask: u32,
    /// Positional shadow atlas resolution for every render target.
    pub shadow_atlas_size: u32,
    /// Which angular sub-step the sweep starts at.
    pub start_phase: StartPhase,
    /// Projection-correction strategy applied once the scan completes.
    pub warp_mode: WarpMode,
    /// Number of consecutive ticks a requested frame may stay incomplete
    /// before `tick` reports a stall. `None` disables stall detection.
    pub stall_limit: Option<u32>,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            texture_size: 4096,
            lane_count: 64,
            eye_separation: 0.0333,
            near_clip: 0.01,
            far_clip: 10_000.0,
            // The lower 18 visibility layers.
            cull_mask: 0x3FFFF,
            shadow_atlas_size: 4096,
            start_phase: StartPhase::default(),
            warp_mode: WarpMode::default(),
            stall_limit: None,
        }
    }
}

impl RigConfig {
    /// Validates the pixel-math preconditions.
    ///
    /// The compositor and warp assume `lane_count` divides `texture_size`
    /// and that the buffer splits into four equal-height bands; violating
    /// either would silently corrupt the output, so both are rejected here.
    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.lane_count == 0 {
            return Err(CaptureError::ZeroLaneCount);
        }
        if self.texture_size == 0 {
            return Err(CaptureError::ZeroTextureSize);
        }
        if self.texture_size % 4 != 0 {
            return Err(CaptureError::TextureSizeNotDivisibleBy4 {
                texture_size: self.texture_size,
            });
        }
        if self.texture_size % self.lane_count != 0 {
            return Err(CaptureError::LaneCountMismatch {
                lane_count: self.lane_count,
                texture_size: self.texture_size,
            });
        }
        Ok(())
    }

    /// Number of sequential angular sub-steps within a lane, one captured
    /// per scheduling tick.
    #[inline]
    pub fn columns_per_lane(&self) -> u32 {
        self.texture_size / self.lane_count
    }

    /// Height of one eye/half band, and of every captured strip.
    #[inline]
    pub fn strip_height(&self) -> u32 {
        self.texture_size / 4
    }

    /// Total number of render surfaces: `lane_count` lanes × 2 eyes × 2
    /// vertical halves.
    #[inline]
    pub fn surface_count(&self) -> usize {
        self.lane_count as usize * 4
    }
}
