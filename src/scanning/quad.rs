use imageproc::contours::Contour;
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;

use crate::config::CONFIG;
use crate::models::sheet::{Corners, FrameSize, ScanPoint};
use crate::my_utils::math::{is_convex, sort_corners};

/// 最终筛选用的判据：恰好四个顶点且为凸
pub fn is_document_quad(approx: &[Point<i32>]) -> bool {
    approx.len() == 4 && is_convex(approx)
}

/// 从轮廓列表里选出纸张的四边形
/// 只扫描前几个轮廓，外层大轮廓靠前，第一个合格的直接返回
pub fn select_quadrilateral(contours: &[Contour<i32>], size: FrameSize) -> Option<Corners> {
    let bound = contours.len().min(CONFIG.quad_select.max_candidates);
    for contour in contours.iter().take(bound) {
        // 点数不够构成四边形的直接跳过，不算错误
        if contour.points.len() < 4 {
            continue;
        }
        let peri = arc_length(&contour.points, true);
        let approx = approximate_polygon_dp(
            &contour.points,
            CONFIG.quad_select.approx_epsilon_ratio * peri,
            true,
        );
        if is_document_quad(&approx) {
            let points: Vec<ScanPoint> = approx
                .iter()
                .map(|p| ScanPoint::new(p.x as f64, p.y as f64))
                .collect();
            return Some(Corners::new(sort_corners(&points), size));
        }
    }
    None
}
