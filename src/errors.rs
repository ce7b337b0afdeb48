use thiserror::Error;

/// 矫正阶段的错误类型
/// "没检测到纸张"不是错误，用Option表达
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScanError {
    #[error("expected exactly 4 corner points, got {0}")]
    InvalidCornerInput(usize),

    #[error("quadrilateral collapses to a {width}x{height} output")]
    DegenerateGeometry { width: u32, height: u32 },

    #[error("corner points admit no perspective transform")]
    DegenerateTransform,
}
