//! Default session selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Hotel selected when the CLI is not given `--hotel`.
    #[serde(default)]
    pub hotel_id: String,
}
