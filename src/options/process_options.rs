use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use super::image_mask::ImageMask;
use super::swap_mode::SwapMode;
use super::swap_model::resolve_swap_model;
use crate::error::{OptionsError, Result};

/// Number of consecutive frames a swap result may be reused for.
pub const MAX_NUM_REUSE_FRAME: u32 = 15;

/// Parameters of a single processor, opaque to this crate.
pub type ProcessorDefine = serde_json::Map<String, serde_json::Value>;

/// Processor name -> parameters, in the order the caller listed them.
pub type ProcessorDefines = IndexMap<String, ProcessorDefine>;

/// Everything the caller resolved for one processing run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// `"<name> <size>"`, e.g. `"inswapper 128"`.
    pub swap_model: Option<String>,
    pub processordefines: ProcessorDefines,
    pub face_distance: f32,
    pub blend_ratio: f32,
    pub swap_mode: SwapMode,
    pub selected_index: usize,
    pub masking_text: String,
    pub imagemask: Option<ImageMask>,
    pub num_steps: u32,
    pub subsample_size: u32,
    pub show_face_area: bool,
    pub restore_original_mouth: bool,
    #[serde(default)]
    pub show_mask: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessOptions {
    pub swap_modelname: Option<String>,
    pub swap_output_size: u32,
    pub processors: ProcessorDefines,
    pub face_distance_threshold: f32,
    pub blend_ratio: f32,
    pub swap_mode: SwapMode,
    pub selected_index: usize,
    pub masking_text: String,
    pub imagemask: Option<ImageMask>,
    pub num_swap_steps: u32,
    pub show_face_area_overlay: bool,
    pub show_face_masking: bool,
    pub subsample_size: u32,
    pub restore_original_mouth: bool,
    pub max_num_reuse_frame: u32,
}

impl ProcessOptions {
    /// Builds the options for one run.
    ///
    /// The only derived value is `swap_output_size`, read from the trailing
    /// integer of `swap_model` (128 when no model is given). Every other
    /// field is taken over as-is.
    ///
    /// # Errors
    ///
    /// [`OptionsError::ModelNameParse`] if `swap_model` is set but does not
    /// end in a positive integer token.
    pub fn new(request: ProcessRequest) -> Result<Self> {
        let ProcessRequest {
            swap_model,
            processordefines,
            face_distance,
            blend_ratio,
            swap_mode,
            selected_index,
            masking_text,
            imagemask,
            num_steps,
            subsample_size,
            show_face_area,
            restore_original_mouth,
            show_mask,
        } = request;

        let (swap_modelname, swap_output_size) = resolve_swap_model(swap_model)?;

        let options = Self {
            swap_modelname,
            swap_output_size,
            processors: processordefines,
            face_distance_threshold: face_distance,
            blend_ratio,
            swap_mode,
            selected_index,
            masking_text,
            imagemask,
            num_swap_steps: num_steps,
            show_face_area_overlay: show_face_area,
            show_face_masking: show_mask,
            subsample_size,
            restore_original_mouth,
            max_num_reuse_frame: MAX_NUM_REUSE_FRAME,
        };
        debug!(
            "[ProcessOptions::new] model: {:?}, output size: {}, mode: {}, processors: {:?}",
            options.swap_modelname,
            options.swap_output_size,
            options.swap_mode,
            options.processors.keys().collect::<Vec<_>>()
        );
        Ok(options)
    }

    pub fn has_swap_model(&self) -> bool {
        self.swap_modelname.is_some()
    }

    pub fn processor(&self, name: &str) -> Option<&ProcessorDefine> {
        self.processors.get(name)
    }
}

impl TryFrom<ProcessRequest> for ProcessOptions {
    type Error = OptionsError;

    fn try_from(request: ProcessRequest) -> Result<Self> {
        ProcessOptions::new(request)
    }
}
