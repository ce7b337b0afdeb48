use image::{DynamicImage, Rgb, RgbImage};
use imageproc::contours::{find_contours, Contour};
use imageproc::distance_transform::Norm;
use imageproc::drawing::draw_line_segment_mut;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::morphology::dilate;
use imageproc::point::Point;

use crate::config::CONFIG;
use crate::my_utils::math::{corner_cosine, polygon_area};

/// 输入一帧图片，输出按发现顺序排列的闭合轮廓
/// 不做面积排序，外层轮廓先被发现，排序隐含在层级顺序里
pub fn extract_contours(frame: &DynamicImage) -> Vec<Contour<i32>> {
    // 灰度
    let gray_img = frame.to_luma8();

    // 高斯模糊抑制噪声
    let blurred_img = gaussian_blur_f32(&gray_img, CONFIG.edge_detect.gaussian_blur_sigma);

    // 边缘检测
    let canned_img = canny(
        &blurred_img,
        CONFIG.edge_detect.canny_low,
        CONFIG.edge_detect.canny_high,
    );

    // 膨胀把纸张边缘的小断口接起来，形成闭环
    let dilated_img = dilate(&canned_img, Norm::LInf, CONFIG.edge_detect.dilate_kernel);

    find_contours(&dilated_img)
}

/// 预览高亮用的类矩形判据，与最终筛选相互独立
/// 面积小于100直接排除边缘噪声，等于100保留
pub fn is_rectangle_like(points: &[Point<i32>]) -> bool {
    if polygon_area(points) < CONFIG.quad_select.min_contour_area {
        return false;
    }

    let peri = arc_length(points, true);
    let approx = approximate_polygon_dp(
        points,
        CONFIG.quad_select.highlight_epsilon_ratio * peri,
        true,
    );

    let n = approx.len();
    if !(4..=6).contains(&n) {
        return false;
    }

    // 每个顶点与两邻点夹角的余弦，全部接近90度才算类矩形
    let mut cosines = Vec::with_capacity(n);
    for i in 0..n {
        cosines.push(corner_cosine(
            approx[(i + 1) % n],
            approx[(i + n - 1) % n],
            approx[i],
        ));
    }
    cosines.sort_by(|a, b| a.total_cmp(b));

    let min_cos = cosines[0];
    let max_cos = cosines[n - 1];
    min_cos >= CONFIG.quad_select.min_corner_cosine && max_cos <= CONFIG.quad_select.max_corner_cosine
}

/// 在预览帧上给类矩形轮廓描边
pub fn draw_sheet_highlight(img: &mut RgbImage, contours: &[Contour<i32>]) {
    for contour in contours.iter() {
        if !is_rectangle_like(&contour.points) {
            continue;
        }
        let peri = arc_length(&contour.points, true);
        let approx = approximate_polygon_dp(
            &contour.points,
            CONFIG.quad_select.highlight_epsilon_ratio * peri,
            true,
        );
        for (i, p) in approx.iter().enumerate() {
            let q = &approx[(i + 1) % approx.len()];
            draw_line_segment_mut(
                img,
                (p.x as f32, p.y as f32),
                (q.x as f32, q.y as f32),
                Rgb([0, 255, 0]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    use super::*;
    use crate::test_support::dense_polygon;

    /// 沿矩形边界逐像素取点
    fn rect_outline(x0: i32, y0: i32, w: i32, h: i32) -> Vec<Point<i32>> {
        let mut pts = Vec::new();
        for x in x0..x0 + w {
            pts.push(Point::new(x, y0));
        }
        for y in y0..y0 + h {
            pts.push(Point::new(x0 + w, y));
        }
        for x in ((x0 + 1)..=(x0 + w)).rev() {
            pts.push(Point::new(x, y0 + h));
        }
        for y in ((y0 + 1)..=(y0 + h)).rev() {
            pts.push(Point::new(x0, y));
        }
        pts
    }

    #[test]
    fn blank_frame_has_no_contours() {
        let frame = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([250, 250, 250])));
        assert!(extract_contours(&frame).is_empty());
    }

    #[test]
    fn sheet_frame_yields_contours() {
        let mut img = RgbImage::from_pixel(200, 160, Rgb([250, 250, 250]));
        draw_filled_rect_mut(&mut img, Rect::at(30, 30).of_size(120, 90), Rgb([70, 70, 70]));
        let contours = extract_contours(&DynamicImage::ImageRgb8(img));
        assert!(!contours.is_empty());
    }

    #[test]
    fn square_outline_is_rectangle_like() {
        // 面积正好100，处在保留阈值上
        assert!(is_rectangle_like(&rect_outline(0, 0, 10, 10)));
    }

    #[test]
    fn tiny_outline_is_rejected_by_area() {
        // 面积25，小于100被当作噪声
        assert!(!is_rectangle_like(&rect_outline(0, 0, 5, 5)));
    }

    #[test]
    fn skewed_parallelogram_is_rejected_by_angles() {
        // 夹角余弦约0.37，超出0.3上限
        let pts = dense_polygon(&[(0, 0), (100, 0), (140, 100), (40, 100)]);
        assert!(!is_rectangle_like(&pts));
    }

    #[test]
    fn highlight_draws_on_preview() {
        let mut img = RgbImage::from_pixel(200, 160, Rgb([250, 250, 250]));
        draw_filled_rect_mut(&mut img, Rect::at(30, 30).of_size(120, 90), Rgb([70, 70, 70]));
        let frame = DynamicImage::ImageRgb8(img.clone());
        let contours = extract_contours(&frame);

        draw_sheet_highlight(&mut img, &contours);
        let green = img.pixels().filter(|p| p.0 == [0, 255, 0]).count();
        assert!(green > 0, "expected highlight pixels on the preview frame");
    }
}
