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

//! The fixed pool of render surfaces backing the rig's virtual cameras.

use super::camera::LogicalCamera;
use super::config::RigConfig;
use super::error::CaptureError;
use crate::math::Extent2D;
use crate::renderer::{RenderSurface, SurfaceDesc, SurfaceProvider};

/// Width in pixels of every strip render target.
///
/// A 1-pixel target loses all scene lighting in host renderers; 5 is the
/// smallest width verified safe. Only the midline column is kept.
pub const STRIP_SURFACE_WIDTH: u32 = 5;

/// Owns the `lane_count × 2 eyes × 2 halves` render-target +
/// virtual-camera pairs, created once at construction and reused for
/// every scan.
///
/// Surfaces are heavyweight host resources, so the pool is sized once and
/// never grows; during a scan only camera poses change. Attaching and
/// detaching toggles every surface's scene membership and is tracked by a
/// flag so the scheduler can call either speculatively every tick.
pub struct RenderSurfacePool {
    surfaces: Vec<(LogicalCamera, Box<dyn RenderSurface>)>,
    attached: bool,
}

impl RenderSurfacePool {
    /// Creates all surfaces through the host renderer, in the canonical
    /// [`LogicalCamera::all`] order, starting detached.
    pub fn new(
        config: &RigConfig,
        provider: &mut dyn SurfaceProvider,
    ) -> Result<Self, CaptureError> {
        let mut surfaces = Vec::with_capacity(config.surface_count());
        for camera in LogicalCamera::all(config.lane_count) {
            let desc = SurfaceDesc {
                label: format!("pano-{camera}"),
                extent: Extent2D::new(STRIP_SURFACE_WIDTH, config.strip_height()),
                fov_y_degrees: 90.0,
                near_clip: config.near_clip,
                far_clip: config.far_clip,
                cull_mask: config.cull_mask,
                shadow_atlas_size: config.shadow_atlas_size,
            };
            let mut surface = provider.create_surface(&desc)?;
            surface.set_scene_membership(false);
            surfaces.push((camera, surface));
        }
        log::debug!("Created {} panorama render surfaces", surfaces.len());
        Ok(Self {
            surfaces,
            attached: false,
        })
    }

    /// Inserts every surface into the live scene. Idempotent.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        for (_, surface) in &mut self.surfaces {
            surface.set_scene_membership(true);
        }
    }

    /// Removes every surface from the live scene and disables its
    /// render-target updates. Idempotent, and cheap enough to call every
    /// idle tick.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        for (_, surface) in &mut self.surfaces {
            surface.set_scene_membership(false);
        }
    }

    /// Whether the surfaces are currently part of the live scene.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Number of surfaces in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether the pool holds no surfaces. Only true for a zero-lane rig,
    /// which configuration validation rejects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Iterates every camera with mutable access to its surface.
    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (LogicalCamera, &mut (dyn RenderSurface + 'static))> + '_ {
        self.surfaces
            .iter_mut()
            .map(|(camera, surface)| (*camera, surface.as_mut()))
    }
}
