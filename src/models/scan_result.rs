/*
    输出结构
*/

use serde::{Deserialize, Serialize};

use super::sheet::Corners;

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputScan {
    pub has_sheet: bool,
    pub corners: Option<Corners>,
    /// 矫正+二值化后的图，jpeg base64
    pub enhanced: Option<String>,
}

impl OutputScan {
    /// 没检测到纸张时的输出
    pub fn empty() -> Self {
        OutputScan {
            has_sheet: false,
            corners: None,
            enhanced: None,
        }
    }
}
