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

//! The post-capture projection correction.
//!
//! The sweep captures at perspective projection, but VR playback software
//! expects equirectangular, where vertical position maps linearly to
//! pitch. The correction is a pure row remap: every destination row is
//! copied wholesale from a source row picked by a nonlinear transform,
//! columns untouched.
//!
//! Multiple destination rows can map to the same source row, so the remap
//! must not run in place: it reads the untouched capture and writes a
//! fresh buffer.

use serde::{Deserialize, Serialize};

use crate::image::PixelBuffer;
use crate::math::{FRAC_PI_2, FRAC_PI_4, PI};

/// The projection-correction formula to apply after the scan.
///
/// Neither formula has been verified geometrically correct upstream; the
/// arctangent variant is the production behavior and the tangent variant
/// is retained because existing captures were produced with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WarpMode {
    /// Arctangent row remap applied independently per eye hemisphere
    /// (top half of the buffer = left eye, bottom half = right eye).
    #[default]
    EyeArctan,
    /// The older tangent-based remap over the whole image.
    LegacyTangent,
}

/// Remaps a finished capture from perspective to equirectangular
/// projection, returning a fresh buffer of the same extent.
pub fn warp_to_equirectangular(source: &PixelBuffer, mode: WarpMode) -> PixelBuffer {
    match mode {
        WarpMode::EyeArctan => warp_eye_arctan(source),
        WarpMode::LegacyTangent => warp_legacy_tangent(source),
    }
}

/// The source row feeding destination row `y` of one eye hemisphere of
/// height `half_height`, under the arctangent remap.
///
/// Rows at the hemisphere midline map near-identically; rows toward the
/// poles pull from increasingly compressed source bands. The result is
/// always within `[0, half_height)` for a nonzero `half_height`; a
/// degenerate zero-height hemisphere yields row 0.
pub fn arctan_source_row(y: u32, half_height: u32) -> u32 {
    if half_height == 0 {
        return 0;
    }
    let dy = y as f32 / half_height as f32;
    let t = (dy - 0.5) / 0.5;
    let source_angle = t.atan();
    let normalized = (source_angle + FRAC_PI_4) / FRAC_PI_2;
    let row = (normalized * half_height as f32).floor();
    (row.max(0.0) as u32).min(half_height - 1)
}

fn warp_eye_arctan(source: &PixelBuffer) -> PixelBuffer {
    let mut output = PixelBuffer::new(source.extent());
    let half_height = source.height() / 2;
    for eye in 0..2 {
        let base = eye * half_height;
        for y in 0..half_height {
            let source_row = arctan_source_row(y, half_height);
            output
                .row_mut(base + y)
                .copy_from_slice(source.row(base + source_row));
        }
    }
    output
}

fn warp_legacy_tangent(source: &PixelBuffer) -> PixelBuffer {
    let mut output = PixelBuffer::new(source.extent());
    let height = source.height();
    for y in 0..height {
        let dy = y as f32 / height as f32;
        let phi = (dy % 0.5) * PI - FRAC_PI_4;
        let sy = phi.tan() * 0.25 + 0.25 + if dy < 0.5 { 0.5 } else { 0.0 };
        let source_row = ((sy * height as f32).floor().max(0.0) as u32).min(height - 1);
        output.row_mut(y).copy_from_slice(source.row(source_row));
    }
    output
}
