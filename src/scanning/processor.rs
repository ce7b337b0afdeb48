use anyhow::Result;
use image::{DynamicImage, GenericImageView, GrayImage, RgbImage};
use tracing::debug;

use crate::models::sheet::{Corners, FrameSize, ScanPoint};
use crate::scanning::contours::extract_contours;
use crate::scanning::enhance::enhance;
use crate::scanning::quad::select_quadrilateral;
use crate::scanning::rectify::rectify;

/// 每帧调用一次，检测纸张轮廓
/// 没检测到返回None，属于正常结果，等下一帧重试
pub fn process_frame(frame: &DynamicImage) -> Option<Corners> {
    let contours = extract_contours(frame);
    let size = FrameSize {
        width: frame.width(),
        height: frame.height(),
    };
    let corners = select_quadrilateral(&contours, size);
    if corners.is_none() {
        debug!("no sheet in {}x{} frame", size.width, size.height);
    }
    corners
}

/// 按角点裁切拉平纸张区域，角点必须正好四个
pub fn cut_sheet(picture: &RgbImage, pts: &[ScanPoint]) -> Result<RgbImage> {
    rectify(picture, pts)
}

/// 对裁切结果做二值化增强
pub fn enhance_sheet(src: &DynamicImage) -> GrayImage {
    enhance(src)
}
