use std::fmt;

use serde::{Deserialize, Serialize};

/// Which detected faces get swapped.
///
/// Names the pipeline does not know about are kept in `Other` so the value
/// given by the caller survives untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SwapMode {
    #[default]
    First,
    Selected,
    All,
    AllInput,
    AllFemale,
    AllMale,
    AllRandom,
    Other(String),
}

impl SwapMode {
    pub fn as_str(&self) -> &str {
        match self {
            SwapMode::First => "first",
            SwapMode::Selected => "selected",
            SwapMode::All => "all",
            SwapMode::AllInput => "all_input",
            SwapMode::AllFemale => "all_female",
            SwapMode::AllMale => "all_male",
            SwapMode::AllRandom => "all_random",
            SwapMode::Other(name) => name,
        }
    }
}

impl From<&str> for SwapMode {
    fn from(name: &str) -> Self {
        match name {
            "first" => SwapMode::First,
            "selected" => SwapMode::Selected,
            "all" => SwapMode::All,
            "all_input" => SwapMode::AllInput,
            "all_female" => SwapMode::AllFemale,
            "all_male" => SwapMode::AllMale,
            "all_random" => SwapMode::AllRandom,
            other => SwapMode::Other(other.to_string()),
        }
    }
}

impl From<String> for SwapMode {
    fn from(name: String) -> Self {
        SwapMode::from(name.as_str())
    }
}

impl From<SwapMode> for String {
    fn from(mode: SwapMode) -> Self {
        match mode {
            SwapMode::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
