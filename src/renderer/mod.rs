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

//! The seam between the capture pipeline and the host 3D renderer.
//!
//! The capture code never talks to a scene graph or a GPU directly. It
//! poses render surfaces, toggles their scene membership, and reads back
//! rendered pixels through the traits defined here; a host engine
//! implements them on top of whatever offscreen-rendering facility it has.

pub mod surface;

pub use self::surface::{RenderSurface, SurfaceDesc, SurfaceError, SurfaceProvider};
