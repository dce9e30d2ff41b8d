use std::borrow::Cow;
use std::num::NonZeroU32;

use crate::error::{OptionsError, Result};

/// Output size used when no swap model is selected.
pub const DEFAULT_SWAP_OUTPUT_SIZE: u32 = 128;

/// Reads the output resolution encoded as the last whitespace separated token
/// of a swap model name, `"inswapper 128"` -> `128`.
pub fn parse_swap_output_size(model: &str) -> Result<u32> {
    // an empty name parses as "" so it reports the same error kind
    let token = model.split_whitespace().next_back().unwrap_or("");
    strip_digit_separators(token)
        .parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .map_err(|source| OptionsError::ModelNameParse {
            model: model.to_string(),
            source,
        })
}

/// Drops `_` separators that sit between two digits, `"1_024"` -> `"1024"`.
/// Any other underscore leaves the token as-is so it fails to parse.
fn strip_digit_separators(token: &str) -> Cow<'_, str> {
    if !token.contains('_') {
        return Cow::Borrowed(token);
    }
    let bytes = token.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if grouped {
        Cow::Owned(token.replace('_', ""))
    } else {
        Cow::Borrowed(token)
    }
}

/// Returns the stored model name and its output size.
pub(crate) fn resolve_swap_model(swap_model: Option<String>) -> Result<(Option<String>, u32)> {
    match swap_model {
        Some(model) => {
            let size = parse_swap_output_size(&model)?;
            Ok((Some(model), size))
        }
        None => Ok((None, DEFAULT_SWAP_OUTPUT_SIZE)),
    }
}
