use serde::{Deserialize, Serialize};

use crate::options::{ImageMask, ProcessRequest, ProcessorDefines, SwapMode};

/// Install wide defaults for a processing request, read from `[process]`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProcessConfig {
    // 例如 "inswapper 128"，末尾数字为输出尺寸
    pub swap_model: Option<String>,
    pub processors: ProcessorDefines,
    pub face_distance: f32,
    pub blend_ratio: f32,
    pub swap_mode: SwapMode,
    pub masking_text: String,
    pub num_steps: u32,
    pub subsample_size: u32,
    pub show_face_area: bool,
    pub show_mask: bool,
    pub restore_original_mouth: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            swap_model: None,
            processors: ProcessorDefines::new(),
            face_distance: 0.65,
            blend_ratio: 0.65,
            swap_mode: SwapMode::First,
            masking_text: String::new(),
            num_steps: 1,
            subsample_size: 128,
            show_face_area: false,
            show_mask: false,
            restore_original_mouth: false,
        }
    }
}

impl ProcessConfig {
    /// Fills a request from these defaults plus the per-run face selection and mask.
    pub fn request(&self, selected_index: usize, imagemask: Option<ImageMask>) -> ProcessRequest {
        ProcessRequest {
            swap_model: self.swap_model.clone(),
            processordefines: self.processors.clone(),
            face_distance: self.face_distance,
            blend_ratio: self.blend_ratio,
            swap_mode: self.swap_mode.clone(),
            selected_index,
            masking_text: self.masking_text.clone(),
            imagemask,
            num_steps: self.num_steps,
            subsample_size: self.subsample_size,
            show_face_area: self.show_face_area,
            restore_original_mouth: self.restore_original_mouth,
            show_mask: self.show_mask,
        }
    }
}
