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

//! An in-memory stand-in for the host renderer, shared by the
//! integration tests.

use pano_rig::math::{Quaternion, Vec3};
use pano_rig::{PixelBuffer, RenderSurface, SurfaceDesc, SurfaceError, SurfaceProvider};
use std::cell::RefCell;
use std::rc::Rc;

/// Observable state of one fake surface, shared between the pool (which
/// owns the surface) and the test (which inspects and scripts it).
pub struct SurfaceState {
    pub desc: SurfaceDesc,
    pub attached: bool,
    pub pose: Option<(Vec3, Quaternion)>,
    /// The solid color `read_back` renders. Tests change this between
    /// frames to make each (camera, column) capture distinguishable.
    pub color: [u8; 3],
}

pub struct FakeSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl RenderSurface for FakeSurface {
    fn set_pose(&mut self, position: Vec3, orientation: Quaternion) {
        self.state.borrow_mut().pose = Some((position, orientation));
    }

    fn set_scene_membership(&mut self, attached: bool) {
        self.state.borrow_mut().attached = attached;
    }

    fn read_back(&self) -> PixelBuffer {
        let state = self.state.borrow();
        PixelBuffer::filled(state.desc.extent, state.color)
    }
}

/// Hands out [`FakeSurface`]s and keeps a handle to every one created, in
/// creation order (the pool's canonical camera order).
#[derive(Default)]
pub struct FakeProvider {
    pub surfaces: Vec<Rc<RefCell<SurfaceState>>>,
}

impl SurfaceProvider for FakeProvider {
    fn create_surface(&mut self, desc: &SurfaceDesc) -> Result<Box<dyn RenderSurface>, SurfaceError> {
        let state = Rc::new(RefCell::new(SurfaceState {
            desc: desc.clone(),
            attached: true,
            pose: None,
            color: [0, 0, 0],
        }));
        self.surfaces.push(state.clone());
        Ok(Box::new(FakeSurface { state }))
    }
}

impl FakeProvider {
    pub fn all_attached(&self) -> bool {
        self.surfaces.iter().all(|s| s.borrow().attached)
    }

    pub fn all_detached(&self) -> bool {
        self.surfaces.iter().all(|s| !s.borrow().attached)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
