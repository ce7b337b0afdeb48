use anyhow::Result;
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use tracing::debug;

use crate::errors::ScanError;
use crate::models::sheet::ScanPoint;
use crate::my_utils::math::euclidean_distance;

/// 把角点围成的四边形拉平成正矩形
/// 输出宽高取量到的对边长度较大者
pub fn rectify(picture: &RgbImage, pts: &[ScanPoint]) -> Result<RgbImage> {
    if pts.len() != 4 {
        return Err(ScanError::InvalidCornerInput(pts.len()).into());
    }
    for p in pts.iter() {
        debug!("corner point: ({}, {})", p.x, p.y);
    }

    let tl = pts[0];
    let tr = pts[1];
    let br = pts[2];
    let bl = pts[3];

    // 上下两条边各估一次宽
    let width_a = euclidean_distance((br.x, br.y), (bl.x, bl.y));
    let width_b = euclidean_distance((tr.x, tr.y), (tl.x, tl.y));
    let dw = width_a.max(width_b);
    let max_width = dw as u32;

    // 左右两条边各估一次高
    let height_a = euclidean_distance((tr.x, tr.y), (br.x, br.y));
    let height_b = euclidean_distance((tl.x, tl.y), (bl.x, bl.y));
    let dh = height_a.max(height_b);
    let max_height = dh as u32;

    // 上游的面积过滤应该挡住退化四边形，这里再兜一次底
    if max_width == 0 || max_height == 0 {
        return Err(ScanError::DegenerateGeometry {
            width: max_width,
            height: max_height,
        }
        .into());
    }

    let projection = Projection::from_control_points(
        [
            (tl.x as f32, tl.y as f32),
            (tr.x as f32, tr.y as f32),
            (br.x as f32, br.y as f32),
            (bl.x as f32, bl.y as f32),
        ],
        [
            (0.0, 0.0),
            (dw as f32, 0.0),
            (dw as f32, dh as f32),
            (0.0, dh as f32),
        ],
    )
    .ok_or(ScanError::DegenerateTransform)?;

    let mut cropped = RgbImage::new(max_width, max_height);
    warp_into(
        picture,
        &projection,
        Interpolation::Bilinear,
        Rgb([255, 255, 255]),
        &mut cropped,
    );
    debug!("crop finish: {}x{}", max_width, max_height);
    Ok(cropped)
}
