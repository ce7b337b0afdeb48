use anyhow::Result;
use image::DynamicImage;
use tracing::debug;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::models::scan_result::OutputScan;
use crate::my_utils::image::{gray_to_base64, trans_base64_to_image};
use crate::scanning::processor::{cut_sheet, enhance_sheet, process_frame};

/// base64图片输入，串起检测+矫正+增强
pub fn scan_picture(base64_image: &String) -> Result<OutputScan> {
    let img = trans_base64_to_image(base64_image)?;
    let corners = match process_frame(&img) {
        Some(corners) => corners,
        None => return Ok(OutputScan::empty()),
    };
    debug!("sheet detected: {:?}", corners.points);

    let cut = cut_sheet(&img.to_rgb8(), &corners.points)?;
    let enhanced = enhance_sheet(&DynamicImage::ImageRgb8(cut));

    Ok(OutputScan {
        has_sheet: true,
        corners: Some(corners),
        enhanced: Some(gray_to_base64(&enhanced)),
    })
}

/// wasm出口，输出json字符串
#[wasm_bindgen]
pub fn scan_document(base64_image: String) -> String {
    let output = match scan_picture(&base64_image) {
        Ok(output) => output,
        Err(err) => {
            debug!("scan failed: {err}");
            OutputScan::empty()
        }
    };
    serde_json::to_string(&output).expect("Encode scan output failed")
}
