//! 定义输入输出和公用结构体

pub mod scan_result;

/// 定义常用结构体
pub mod sheet {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq)]
    pub struct ScanPoint {
        pub x: f64, // 角点坐标用f64，透视求解需要亚像素精度
        pub y: f64,
    }

    impl ScanPoint {
        pub fn new(x: f64, y: f64) -> Self {
            ScanPoint { x, y }
        }
    }

    /// 原始帧的宽高，给下游做比例参照
    #[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
    pub struct FrameSize {
        pub width: u32,
        pub height: u32,
    }

    /// 检测结果：四个角点，固定顺序 左上/右上/右下/左下
    #[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq)]
    pub struct Corners {
        pub points: [ScanPoint; 4],
        pub size: FrameSize,
    }

    impl Corners {
        pub fn new(points: [ScanPoint; 4], size: FrameSize) -> Self {
            Corners { points, size }
        }

        pub fn tl(&self) -> ScanPoint {
            self.points[0]
        }

        pub fn tr(&self) -> ScanPoint {
            self.points[1]
        }

        pub fn br(&self) -> ScanPoint {
            self.points[2]
        }

        pub fn bl(&self) -> ScanPoint {
            self.points[3]
        }
    }
}
