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

//! The multi-frame capture state machine.
//!
//! A scan takes `columns_per_lane` host frames. Each tick the scheduler
//! attaches the surface pool, poses every camera for the current column,
//! and arms a one-shot completion callback; when the host reports the
//! frame finished, every surface's strip is composited and the column
//! advances. After the last column the equirectangular warp runs once and
//! the scheduler returns to idle with the finished image available.
//!
//! Everything runs on the host's single render/update thread; the only
//! suspension point is waiting for the current frame's render, modeled by
//! the armed flag between [`CaptureScheduler::tick`] and
//! [`CaptureScheduler::complete_frame`].

use super::compositor::composite_strip;
use super::config::RigConfig;
use super::error::CaptureError;
use super::geometry::{camera_pose, RigTransform};
use super::pool::RenderSurfacePool;
use super::warp::warp_to_equirectangular;
use crate::image::PixelBuffer;
use crate::math::Extent2D;
use crate::renderer::SurfaceProvider;

/// What a scheduling tick asked of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No scan is running; surfaces are detached.
    Idle,
    /// Cameras are posed for the current column; call
    /// [`CaptureScheduler::complete_frame`] once the host finishes
    /// rendering the next frame.
    CaptureRequested,
    /// The frame requested `stall_limit` ticks ago never completed. The
    /// scan is still pending; the caller decides whether to keep waiting
    /// or to [`CaptureScheduler::cancel`].
    Stalled,
}

/// Drives an incremental stereo panorama capture across many host frames.
///
/// The caller pauses simulation time, calls
/// [`CaptureScheduler::start_render`], then once per frame calls
/// [`CaptureScheduler::tick`] before rendering and
/// [`CaptureScheduler::complete_frame`] after, polling
/// [`CaptureScheduler::is_finished`] until the image is ready.
pub struct CaptureScheduler {
    config: RigConfig,
    pool: RenderSurfacePool,
    output: PixelBuffer,
    /// `-1` when idle, otherwise the column currently being captured.
    current_column: i32,
    /// The one-shot frame-completion callback is registered. Arming while
    /// armed stays armed; `complete_frame` clears it as its first action.
    armed: bool,
    /// Ticks spent waiting on the armed frame, for stall detection.
    armed_ticks: u32,
}

impl CaptureScheduler {
    /// Validates the configuration and creates the surface pool and the
    /// zero-filled output buffer. Surfaces start detached.
    pub fn new(
        config: RigConfig,
        provider: &mut dyn SurfaceProvider,
    ) -> Result<Self, CaptureError> {
        config.validate()?;
        let pool = RenderSurfacePool::new(&config, provider)?;
        let output = PixelBuffer::new(Extent2D::new(config.texture_size, config.texture_size));
        Ok(Self {
            config,
            pool,
            output,
            current_column: -1,
            armed: false,
            armed_ticks: 0,
        })
    }

    /// Begins a scan at column 0.
    ///
    /// Returns `false` without touching the running scan if one is already
    /// in progress; a busy rig is a recoverable condition, not an error.
    pub fn start_render(&mut self) -> bool {
        if self.current_column >= 0 {
            log::warn!("Panorama capture already scanning; start request ignored");
            return false;
        }
        log::info!(
            "Starting panorama capture: {0}x{0} output, {1} lanes, {2} columns per lane",
            self.config.texture_size,
            self.config.lane_count,
            self.config.columns_per_lane()
        );
        self.current_column = 0;
        true
    }

    /// Whether no scan is in progress. True before the first scan; the
    /// finished image is available from [`CaptureScheduler::image`].
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_column < 0
    }

    /// The column currently being captured, or `-1` when idle.
    #[inline]
    pub fn current_column(&self) -> i32 {
        self.current_column
    }

    /// Runs one scheduling tick, before the host renders the frame.
    ///
    /// While scanning: attaches the pool, poses every camera for the
    /// current column relative to `rig`, and arms the completion
    /// callback, strictly in that order. While idle: keeps the surfaces
    /// detached, a power and performance measure rather than a
    /// correctness requirement.
    pub fn tick(&mut self, rig: &RigTransform) -> TickOutcome {
        if self.current_column < 0 {
            self.pool.detach();
            return TickOutcome::Idle;
        }

        self.pool.attach();
        let column = self.current_column as u32;
        for (camera, surface) in self.pool.iter_mut() {
            let pose = camera_pose(camera, column, &self.config, rig);
            surface.set_pose(pose.position, pose.orientation);
        }

        if self.armed {
            self.armed_ticks += 1;
            if let Some(limit) = self.config.stall_limit {
                if self.armed_ticks >= limit {
                    log::warn!(
                        "Panorama capture stalled: column {column} has waited {} ticks for a frame",
                        self.armed_ticks
                    );
                    return TickOutcome::Stalled;
                }
            }
        } else {
            self.armed = true;
            self.armed_ticks = 0;
        }
        TickOutcome::CaptureRequested
    }

    /// The one-shot frame-completion callback, invoked by the host after
    /// rendering finishes.
    ///
    /// A no-op unless a capture was armed by [`CaptureScheduler::tick`],
    /// so a host that fires its post-draw hook unconditionally cannot
    /// double-composite a column. Composites every camera's strip, then
    /// either advances to the next column or, after the last one, runs the
    /// equirectangular warp and returns to idle.
    pub fn complete_frame(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        self.armed_ticks = 0;
        if self.current_column < 0 {
            return;
        }

        let column = self.current_column as u32;
        let config = self.config;
        for (camera, surface) in self.pool.iter_mut() {
            let strip = surface.read_back();
            composite_strip(&strip, camera, column, &config, &mut self.output);
        }

        if column + 1 < self.config.columns_per_lane() {
            self.current_column += 1;
            log::debug!(
                "Captured column {column}/{}",
                self.config.columns_per_lane()
            );
        } else {
            log::info!("Panorama scan complete; applying equirectangular warp");
            self.output = warp_to_equirectangular(&self.output, self.config.warp_mode);
            self.current_column = -1;
        }
    }

    /// Aborts a scan in progress, discarding partial capture progress.
    ///
    /// Disarms the completion callback so a late host post-draw hook
    /// cannot composite into the abandoned buffer, and detaches the
    /// surfaces immediately. Harmless when idle.
    pub fn cancel(&mut self) {
        if self.current_column >= 0 {
            log::info!(
                "Panorama capture cancelled at column {}",
                self.current_column
            );
        }
        self.current_column = -1;
        self.armed = false;
        self.armed_ticks = 0;
        self.pool.detach();
    }

    /// The output buffer: the finished panorama once
    /// [`CaptureScheduler::is_finished`] reports true after a scan, a
    /// partial capture while scanning.
    #[inline]
    pub fn image(&self) -> &PixelBuffer {
        &self.output
    }

    /// Takes the output buffer, leaving a zero-filled one in its place.
    pub fn take_image(&mut self) -> PixelBuffer {
        std::mem::replace(
            &mut self.output,
            PixelBuffer::new(Extent2D::new(self.config.texture_size, self.config.texture_size)),
        )
    }

    /// The rig configuration this scheduler was built with.
    #[inline]
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Whether the render surfaces are currently attached to the scene.
    #[inline]
    pub fn surfaces_attached(&self) -> bool {
        self.pool.is_attached()
    }
}
