use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use imageproc::integral_image::{integral_image, sum_image_pixels};

use crate::config::CONFIG;

/// 对矫正后的图做二值化增强，提高可读性
/// 输入是必填的，不做默认分辨率兜底
pub fn enhance(src: &DynamicImage) -> GrayImage {
    let gray_img = src.to_luma8();
    adaptive_mean_threshold(
        &gray_img,
        CONFIG.enhance.block_radius,
        CONFIG.enhance.mean_offset,
    )
}

/// 自适应均值二值化，阈值取邻域均值减偏移
/// 用积分图求区域像素和，窗口在边界处截断
pub fn adaptive_mean_threshold(gray: &GrayImage, block_radius: u32, mean_offset: i64) -> GrayImage {
    let integral: ImageBuffer<Luma<i64>, Vec<i64>> = integral_image(gray);
    let (width, height) = gray.dimensions();
    let mut binary = GrayImage::new(width, height);

    for y in 0..height {
        let top = y.saturating_sub(block_radius);
        let bottom = (y + block_radius).min(height - 1);
        for x in 0..width {
            let left = x.saturating_sub(block_radius);
            let right = (x + block_radius).min(width - 1);

            let sum = sum_image_pixels(&integral, left, top, right, bottom)[0];
            let count = ((right - left + 1) * (bottom - top + 1)) as i64;
            let mean = sum / count;

            let value = if (gray.get_pixel(x, y)[0] as i64) > mean - mean_offset {
                255u8
            } else {
                0u8
            };
            binary.put_pixel(x, y, Luma([value]));
        }
    }

    binary
}
