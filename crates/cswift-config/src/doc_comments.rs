use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

/// Doc-comment passes. Both are on unless turned off.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct DocCommentsConfig {
    /// Copy comments from the C sources onto declarations.
    #[serde(default = "enabled")]
    pub collect: bool,

    /// Rewrite collected comments into Swift markup.
    #[serde(default = "enabled")]
    pub format: bool,
}

impl Default for DocCommentsConfig {
    fn default() -> Self {
        Self {
            collect: enabled(),
            format: enabled(),
        }
    }
}
