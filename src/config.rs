use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// 边缘提取参数
#[derive(Debug, Deserialize, Serialize)]
pub struct EdgeDetect {
    pub gaussian_blur_sigma: f32,
    pub canny_low: f32,
    pub canny_high: f32,
    /// LInf膨胀半径，4对应9x9矩形核
    pub dilate_kernel: u8,
}

/// 四边形筛选参数
#[derive(Debug, Deserialize, Serialize)]
pub struct QuadSelect {
    /// 只扫描前几个轮廓
    pub max_candidates: usize,
    pub approx_epsilon_ratio: f64,
    pub highlight_epsilon_ratio: f64,
    pub min_contour_area: f64,
    pub min_corner_cosine: f64,
    pub max_corner_cosine: f64,
}

/// 二值化增强参数
#[derive(Debug, Deserialize, Serialize)]
pub struct EnhanceArgs {
    /// 均值窗口半径，7对应15x15块
    pub block_radius: u32,
    pub mean_offset: i64,
}

/// 配置参数
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub edge_detect: EdgeDetect,
    pub quad_select: QuadSelect,
    pub enhance: EnhanceArgs,
    // 其他配置参数
}

// 全局配置单例
#[cfg(debug_assertions)]
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    // 读取配置文件
    let file = File::open("config.yaml").expect("Failed to open config file");
    let reader = BufReader::new(file);
    serde_yaml::from_reader(reader).expect("Failed to parse config")
});

#[cfg(not(debug_assertions))]
pub static CONFIG: Config = Config {
    edge_detect: EdgeDetect {
        gaussian_blur_sigma: 1.0,
        canny_low: 10.0,
        canny_high: 120.0,
        dilate_kernel: 4,
    },
    quad_select: QuadSelect {
        max_candidates: 5,
        approx_epsilon_ratio: 0.03,
        highlight_epsilon_ratio: 0.1,
        min_contour_area: 100.0,
        min_corner_cosine: -0.1,
        max_corner_cosine: 0.3,
    },
    enhance: EnhanceArgs {
        block_radius: 7,
        mean_offset: 15,
    },
};
