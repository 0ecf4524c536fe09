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

//! # Pano Rig
//!
//! Captures a stereoscopic 360° panorama of a live 3D scene by sweeping a
//! rig of narrow-FOV virtual cameras around a fixed viewpoint over many
//! successive frames.
//!
//! Each scheduling tick poses one camera pair-of-pairs per angular lane,
//! waits for the host renderer to finish the frame, and composites a
//! 1-pixel-wide strip from every camera into a shared output buffer. Once
//! every column has been captured, the buffer is remapped from perspective
//! to equirectangular projection and handed to the caller, ready for VR
//! playback software.
//!
//! The host engine is abstracted behind the [`renderer`] traits: the crate
//! never talks to a scene graph or a GPU directly, it only poses surfaces,
//! toggles their scene membership, and reads back rendered pixels.

#![warn(missing_docs)]

pub mod capture;
pub mod image;
pub mod math;
pub mod renderer;

pub use capture::{
    CameraPose, CaptureError, CaptureScheduler, Eye, Half, LogicalCamera, RigConfig, RigTransform,
    StartPhase, TickOutcome, WarpMode,
};
pub use image::PixelBuffer;
pub use renderer::{RenderSurface, SurfaceDesc, SurfaceError, SurfaceProvider};
