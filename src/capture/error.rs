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

//! Defines the error types for the capture pipeline.
//!
//! The taxonomy is deliberately narrow: every failure is a precondition
//! violation caught at configuration or construction time. A busy
//! `start_render` and a stalled frame are return values, not errors, and
//! no compositing or warping step can fail on valid buffers.

use crate::renderer::SurfaceError;
use std::fmt;

/// An error raised while validating a rig configuration or constructing
/// the capture pipeline.
#[derive(Debug)]
pub enum CaptureError {
    /// The configured lane count is zero.
    ZeroLaneCount,
    /// The configured output texture size is zero, leaving nothing to
    /// capture and no columns to schedule.
    ZeroTextureSize,
    /// The output texture size is not divisible by 4, so the four
    /// eye/half bands cannot be equal-height.
    TextureSizeNotDivisibleBy4 {
        /// The offending texture size.
        texture_size: u32,
    },
    /// The lane count does not divide the texture size evenly, so lanes
    /// cannot be equal-width. The pixel math assumes exact division.
    LaneCountMismatch {
        /// The configured lane count.
        lane_count: u32,
        /// The configured texture size.
        texture_size: u32,
    },
    /// The host renderer failed to create a render surface.
    Surface(SurfaceError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::ZeroLaneCount => {
                write!(f, "Lane count must be at least 1.")
            }
            CaptureError::ZeroTextureSize => {
                write!(f, "Texture size must be at least 1.")
            }
            CaptureError::TextureSizeNotDivisibleBy4 { texture_size } => {
                write!(
                    f,
                    "Texture size {texture_size} is not divisible by 4; the output \
                     buffer cannot be split into four equal eye/half bands."
                )
            }
            CaptureError::LaneCountMismatch {
                lane_count,
                texture_size,
            } => {
                write!(
                    f,
                    "Lane count {lane_count} does not divide texture size {texture_size} evenly."
                )
            }
            CaptureError::Surface(err) => {
                write!(f, "Render surface creation failed: {err}")
            }
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Surface(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SurfaceError> for CaptureError {
    fn from(err: SurfaceError) -> Self {
        CaptureError::Surface(err)
    }
}
