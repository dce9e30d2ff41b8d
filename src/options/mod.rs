mod image_mask;
mod process_options;
mod swap_mode;
mod swap_model;

pub use image_mask::*;
pub use process_options::*;
pub use swap_mode::*;
pub use swap_model::{parse_swap_output_size, DEFAULT_SWAP_OUTPUT_SIZE};
