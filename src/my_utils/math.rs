use imageproc::point::Point;

use crate::models::sheet::ScanPoint;

/// 欧氏距离
pub fn euclidean_distance(point1: (f64, f64), point2: (f64, f64)) -> f64 {
    let dx = point2.0 - point1.0;
    let dy = point2.1 - point1.1;

    (dx.powi(2) + dy.powi(2)).sqrt()
}

/// pt1-pt0与pt2-pt0两向量夹角的余弦
/// 分母加1e-10避免零向量除零
pub fn corner_cosine(pt1: Point<i32>, pt2: Point<i32>, pt0: Point<i32>) -> f64 {
    let dx1 = (pt1.x - pt0.x) as f64;
    let dy1 = (pt1.y - pt0.y) as f64;
    let dx2 = (pt2.x - pt0.x) as f64;
    let dy2 = (pt2.y - pt0.y) as f64;
    (dx1 * dx2 + dy1 * dy2) / ((dx1 * dx1 + dy1 * dy1) * (dx2 * dx2 + dy2 * dy2) + 1e-10).sqrt()
}

/// 鞋带公式求多边形面积，取绝对值
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        sum += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    (sum.abs() as f64) / 2.0
}

/// 判断多边形是否为凸
/// 相邻边叉积符号一致即为凸，共线边不算改变方向
pub fn is_convex(points: &[Point<i32>]) -> bool {
    let n = points.len();
    if n < 4 {
        return false;
    }
    let mut sign = 0i64;
    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        let p2 = points[(i + 2) % n];
        let cross = (p1.x - p0.x) as i64 * (p2.y - p1.y) as i64
            - (p1.y - p0.y) as i64 * (p2.x - p1.x) as i64;
        if cross == 0 {
            continue;
        }
        if sign == 0 {
            sign = cross.signum();
        } else if sign != cross.signum() {
            return false;
        }
    }
    sign != 0
}

/// 四个角点排成固定顺序
/// x+y最小为左上，y-x最小为右上，x+y最大为右下，y-x最大为左下
pub fn sort_corners(points: &[ScanPoint]) -> [ScanPoint; 4] {
    let key_sum = |p: &&ScanPoint| p.x + p.y;
    let key_diff = |p: &&ScanPoint| p.y - p.x;

    let tl = points
        .iter()
        .min_by(|a, b| key_sum(a).total_cmp(&key_sum(b)))
        .copied()
        .unwrap_or(ScanPoint::new(0.0, 0.0));
    let tr = points
        .iter()
        .min_by(|a, b| key_diff(a).total_cmp(&key_diff(b)))
        .copied()
        .unwrap_or(ScanPoint::new(0.0, 0.0));
    let br = points
        .iter()
        .max_by(|a, b| key_sum(a).total_cmp(&key_sum(b)))
        .copied()
        .unwrap_or(ScanPoint::new(0.0, 0.0));
    let bl = points
        .iter()
        .max_by(|a, b| key_diff(a).total_cmp(&key_diff(b)))
        .copied()
        .unwrap_or(ScanPoint::new(0.0, 0.0));

    [tl, tr, br, bl]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_axis_aligned_segment() {
        assert_eq!(euclidean_distance((0.0, 0.0), (3.0, 4.0)), 5.0);
    }

    #[test]
    fn right_angle_has_zero_cosine() {
        let cos = corner_cosine(
            Point::new(10, 0),
            Point::new(0, 10),
            Point::new(0, 0),
        );
        assert!(cos.abs() < 1e-6);
    }

    #[test]
    fn square_area_matches_shoelace() {
        let square = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert_eq!(polygon_area(&square), 100.0);
    }

    #[test]
    fn convexity_of_square_and_dart() {
        let square = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert!(is_convex(&square));

        // 凹四边形
        let dart = vec![
            Point::new(0, 0),
            Point::new(150, 60),
            Point::new(300, 0),
            Point::new(150, 200),
        ];
        assert!(!is_convex(&dart));
    }

    #[test]
    fn corners_sorted_into_canonical_order() {
        // 乱序传入一个倾斜四边形
        let pts = vec![
            ScanPoint::new(90.0, 110.0), // br
            ScanPoint::new(12.0, 8.0),   // tl
            ScanPoint::new(5.0, 95.0),   // bl
            ScanPoint::new(100.0, 15.0), // tr
        ];
        let sorted = sort_corners(&pts);
        assert_eq!(sorted[0], ScanPoint::new(12.0, 8.0));
        assert_eq!(sorted[1], ScanPoint::new(100.0, 15.0));
        assert_eq!(sorted[2], ScanPoint::new(90.0, 110.0));
        assert_eq!(sorted[3], ScanPoint::new(5.0, 95.0));
    }
}
