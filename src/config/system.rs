use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SystemConfig {
    pub log_level: Option<String>,
    // 设置后写入滚动日志文件，否则输出到 stdout
    pub log_dir: Option<String>,
}

impl SystemConfig {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
