use serde::{Deserialize, Serialize};

/// Explicit single channel mask, one byte per pixel, row major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageMask {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    // 超出范围或数据不足时返回 None
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.data.get(index).copied()
    }
}
