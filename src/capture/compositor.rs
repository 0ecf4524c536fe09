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

//! Copies rendered strips into their slot of the shared output buffer.

use super::camera::{Eye, Half, LogicalCamera};
use super::config::RigConfig;
use crate::image::{PixelBuffer, Region};
use crate::math::Origin2D;

/// Copies one camera's just-rendered strip into the output buffer.
///
/// The render target is a few pixels wide only because degenerate 1-pixel
/// targets break scene lighting in host renderers; a single column from
/// its horizontal midline is all that is kept. The strip lands at
/// `x = column + lane * columns_per_lane` within the camera's eye/half
/// band. Destinations of distinct cameras never overlap at a given
/// column, so iteration order does not matter.
pub fn composite_strip(
    source: &PixelBuffer,
    camera: LogicalCamera,
    column: u32,
    config: &RigConfig,
    output: &mut PixelBuffer,
) {
    let source_x = source.width() / 2;

    let x = column + camera.lane * config.columns_per_lane();
    let mut y = match camera.eye {
        Eye::Left => 0,
        Eye::Right => config.texture_size / 2,
    };
    if camera.half == Half::Lower {
        y += config.texture_size / 4;
    }

    output.blit_rect(
        source,
        Region::new(source_x, 0, 1, config.strip_height()),
        Origin2D::new(x, y),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::pool::STRIP_SURFACE_WIDTH;
    use crate::math::Extent2D;

    fn test_config() -> RigConfig {
        RigConfig {
            texture_size: 32,
            lane_count: 4,
            ..RigConfig::default()
        }
    }

    fn strip(config: &RigConfig, color: [u8; 3]) -> PixelBuffer {
        PixelBuffer::filled(
            Extent2D::new(STRIP_SURFACE_WIDTH, config.strip_height()),
            color,
        )
    }

    fn band_origin_y(camera: LogicalCamera, config: &RigConfig) -> u32 {
        let eye = match camera.eye {
            Eye::Left => 0,
            Eye::Right => config.texture_size / 2,
        };
        let half = match camera.half {
            Half::Upper => 0,
            Half::Lower => config.texture_size / 4,
        };
        eye + half
    }

    #[test]
    fn strip_lands_in_its_own_band() {
        let config = test_config();
        let mut output = PixelBuffer::new(Extent2D::new(config.texture_size, config.texture_size));

        let camera = LogicalCamera {
            eye: Eye::Right,
            half: Half::Lower,
            lane: 2,
        };
        let source = strip(&config, [200, 0, 0]);
        composite_strip(&source, camera, 3, &config, &mut output);

        let expected_x = 3 + 2 * config.columns_per_lane();
        let band_y = band_origin_y(camera, &config);
        for y in 0..config.texture_size {
            for x in 0..config.texture_size {
                let in_strip = x == expected_x && (band_y..band_y + config.strip_height()).contains(&y);
                let expected = if in_strip { [200, 0, 0] } else { [0, 0, 0] };
                assert_eq!(output.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn full_sweep_covers_every_column_exactly_once() {
        let config = test_config();
        let mut output = PixelBuffer::new(Extent2D::new(config.texture_size, config.texture_size));

        // Give every (camera, column) pair a distinguishable color and blit
        // them all, in an arbitrary (reversed) iteration order.
        let cameras: Vec<_> = LogicalCamera::all(config.lane_count).collect();
        for column in 0..config.columns_per_lane() {
            for camera in cameras.iter().rev() {
                let color = [
                    camera.ordinal(config.lane_count) as u8 + 1,
                    column as u8 + 1,
                    0,
                ];
                let source = strip(&config, color);
                composite_strip(&source, *camera, column, &config, &mut output);
            }
        }

        for camera in &cameras {
            let band_y = band_origin_y(*camera, &config);
            for column in 0..config.columns_per_lane() {
                let x = column + camera.lane * config.columns_per_lane();
                for y in band_y..band_y + config.strip_height() {
                    assert_eq!(
                        output.pixel(x, y),
                        [
                            camera.ordinal(config.lane_count) as u8 + 1,
                            column as u8 + 1,
                            0
                        ],
                        "camera {camera} column {column} pixel ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn destination_stays_within_output_bounds() {
        let config = test_config();
        let last_column = config.columns_per_lane() - 1;
        for camera in LogicalCamera::all(config.lane_count) {
            let x = last_column + camera.lane * config.columns_per_lane();
            let y = band_origin_y(camera, &config);
            assert!(x < config.texture_size);
            assert!(y + config.strip_height() <= config.texture_size);
        }
    }

    #[test]
    fn source_column_is_the_midline() {
        let config = test_config();
        let mut output = PixelBuffer::new(Extent2D::new(config.texture_size, config.texture_size));

        // Paint each source column a different value; only the midline
        // column may end up in the output.
        let mut source = PixelBuffer::new(Extent2D::new(STRIP_SURFACE_WIDTH, config.strip_height()));
        for x in 0..STRIP_SURFACE_WIDTH {
            for y in 0..config.strip_height() {
                source.set_pixel(x, y, [x as u8 + 1, 0, 0]);
            }
        }

        let camera = LogicalCamera {
            eye: Eye::Left,
            half: Half::Upper,
            lane: 0,
        };
        composite_strip(&source, camera, 0, &config, &mut output);
        assert_eq!(output.pixel(0, 0), [STRIP_SURFACE_WIDTH as u8 / 2 + 1, 0, 0]);
    }
}
