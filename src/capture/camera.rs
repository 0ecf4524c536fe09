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

//! Logical identity of the virtual cameras making up the capture rig.

use std::fmt;

/// The stereo channel a camera renders for.
///
/// The two eyes are offset from the rig center by half the interpupillary
/// distance in opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    /// The left stereo channel; occupies the top half of the output buffer.
    Left,
    /// The right stereo channel; occupies the bottom half of the output buffer.
    Right,
}

/// The vertical tile a camera captures.
///
/// A single 90° camera cannot cover the full vertical extent, so each eye
/// uses two tilted cameras whose captures are stitched on top of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    /// The upward-tilted capture.
    Upper,
    /// The downward-tilted capture.
    Lower,
}

/// Identity of one virtual camera within the rig.
///
/// There is exactly one render-target + virtual-camera pair per
/// `LogicalCamera`, created once at startup and reused for every scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalCamera {
    /// The stereo channel.
    pub eye: Eye,
    /// The vertical tile.
    pub half: Half,
    /// The angular lane this camera services, in `[0, lane_count)`.
    pub lane: u32,
}

impl LogicalCamera {
    /// Iterates every logical camera of a rig with `lane_count` lanes, in
    /// canonical order: all Left before all Right, Upper before Lower
    /// within an eye, lanes ascending. The render-surface pool creates its
    /// surfaces in exactly this order.
    pub fn all(lane_count: u32) -> impl Iterator<Item = LogicalCamera> {
        [Eye::Left, Eye::Right].into_iter().flat_map(move |eye| {
            [Half::Upper, Half::Lower].into_iter().flat_map(move |half| {
                (0..lane_count).map(move |lane| LogicalCamera { eye, half, lane })
            })
        })
    }

    /// The camera's position within the canonical [`LogicalCamera::all`]
    /// ordering.
    pub fn ordinal(&self, lane_count: u32) -> usize {
        let eye = match self.eye {
            Eye::Left => 0,
            Eye::Right => 1,
        };
        let half = match self.half {
            Half::Upper => 0,
            Half::Lower => 1,
        };
        (eye * 2 + half) * lane_count as usize + self.lane as usize
    }
}

impl fmt::Display for LogicalCamera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eye = match self.eye {
            Eye::Left => "left",
            Eye::Right => "right",
        };
        let half = match self.half {
            Half::Upper => "upper",
            Half::Lower => "lower",
        };
        write!(f, "{eye}-{half}-lane{}", self.lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_yields_four_cameras_per_lane() {
        let cameras: Vec<_> = LogicalCamera::all(8).collect();
        assert_eq!(cameras.len(), 32);
    }

    #[test]
    fn all_orders_left_eye_first() {
        let cameras: Vec<_> = LogicalCamera::all(4).collect();
        assert!(cameras[..8].iter().all(|c| c.eye == Eye::Left));
        assert!(cameras[8..].iter().all(|c| c.eye == Eye::Right));
        assert!(cameras[..4].iter().all(|c| c.half == Half::Upper));
        assert_eq!(cameras[0].lane, 0);
        assert_eq!(cameras[3].lane, 3);
    }

    #[test]
    fn ordinal_inverts_iteration_order() {
        for (index, camera) in LogicalCamera::all(16).enumerate() {
            assert_eq!(camera.ordinal(16), index, "camera {camera}");
        }
    }

    #[test]
    fn display_names_the_camera() {
        let camera = LogicalCamera {
            eye: Eye::Right,
            half: Half::Lower,
            lane: 7,
        };
        assert_eq!(camera.to_string(), "right-lower-lane7");
    }
}
