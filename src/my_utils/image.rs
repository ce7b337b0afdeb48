use std::io::Cursor;

use anyhow::Result;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use image_base64_wasm::from_base64;
use image_base64_wasm::vec_to_base64;

pub fn trans_base64_to_image(base64_image: &String) -> Result<DynamicImage> {
    let base64_data = from_base64(base64_image.clone());
    // 将解码后的数据加载为图像
    let image = image::load_from_memory(&base64_data)?;
    Ok(image)
}

pub fn image_to_base64(img: &RgbImage) -> String {
    let mut image_data: Vec<u8> = Vec::new();
    img.write_to(&mut Cursor::new(&mut image_data), ImageFormat::Jpeg)
        .expect("Encode Image to Base64 Failed");
    vec_to_base64(image_data)
}

pub fn gray_to_base64(img: &GrayImage) -> String {
    let mut image_data: Vec<u8> = Vec::new();
    img.write_to(&mut Cursor::new(&mut image_data), ImageFormat::Jpeg)
        .expect("Encode Image to Base64 Failed");
    vec_to_base64(image_data)
}
