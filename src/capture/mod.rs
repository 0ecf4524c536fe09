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

//! The panorama capture pipeline.
//!
//! [`CaptureScheduler`] is the entry point: it owns the render-surface
//! pool and the output buffer, advances one column of the sweep per
//! completed host frame, and runs the equirectangular warp once the last
//! column has been composited.

pub mod camera;
pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pool;
pub mod scheduler;
pub mod warp;

pub use self::camera::{Eye, Half, LogicalCamera};
pub use self::compositor::composite_strip;
pub use self::config::{RigConfig, StartPhase};
pub use self::error::CaptureError;
pub use self::geometry::{camera_pose, CameraPose, RigTransform};
pub use self::pool::{RenderSurfacePool, STRIP_SURFACE_WIDTH};
pub use self::scheduler::{CaptureScheduler, TickOutcome};
pub use self::warp::{warp_to_equirectangular, WarpMode};
