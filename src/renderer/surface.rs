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

//! Traits for render-target + virtual-camera pairs owned by the host
//! renderer.

use crate::image::PixelBuffer;
use crate::math::{Extent2D, Quaternion, Vec3};
use std::fmt;

/// Everything the host renderer needs to create one render-target +
/// virtual-camera pair.
///
/// All fields are fixed for the lifetime of the surface; per-tick state
/// (camera pose, scene membership) goes through [`RenderSurface`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDesc {
    /// A descriptive label for debugging and host-side resource naming.
    pub label: String,
    /// The render-target size in pixels.
    pub extent: Extent2D,
    /// Vertical field of view of the virtual camera, in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance.
    pub near_clip: f32,
    /// Far clip plane distance.
    pub far_clip: f32,
    /// Scene-visibility mask applied to the virtual camera and its target.
    pub cull_mask: u32,
    /// Resolution of the positional shadow atlas for this target.
    pub shadow_atlas_size: u32,
}

/// One render-target + virtual-camera pair living inside the host scene.
///
/// Implementations are created once through a [`SurfaceProvider`] and
/// reused for every scan; the capture pipeline never allocates surfaces
/// mid-scan.
pub trait RenderSurface {
    /// Moves the virtual camera to a world-space position and orientation.
    ///
    /// Takes effect for the next frame the host renders.
    fn set_pose(&mut self, position: Vec3, orientation: Quaternion);

    /// Inserts the surface into (or removes it from) the live scene graph
    /// and enables or disables its render-target updates.
    ///
    /// Must be idempotent; the pool calls this speculatively every tick.
    fn set_scene_membership(&mut self, attached: bool);

    /// Reads back the image the surface rendered during the last completed
    /// frame.
    fn read_back(&self) -> PixelBuffer;
}

/// Factory for [`RenderSurface`]s, implemented by the host renderer.
pub trait SurfaceProvider {
    /// Creates one render-target + virtual-camera pair from a description.
    fn create_surface(&mut self, desc: &SurfaceDesc) -> Result<Box<dyn RenderSurface>, SurfaceError>;
}

/// An error raised by the host renderer while creating a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceError {
    /// The label of the surface that failed to be created.
    pub label: String,
    /// Detailed error message from the host renderer.
    pub details: String,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to create render surface '{}': {}",
            self.label, self.details
        )
    }
}

impl std::error::Error for SurfaceError {}
