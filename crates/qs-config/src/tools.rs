//! External tool locations.

use serde::{Deserialize, Serialize};

fn default_aws_bin() -> String {
    String::from("aws")
}

fn default_jupyter_bin() -> String {
    String::from("jupyter")
}

fn default_template() -> String {
    String::from("classic")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Object store CLI binary.
    #[serde(default = "default_aws_bin")]
    pub aws_bin: String,

    /// AWS CLI profile. Empty means the CLI's own default.
    #[serde(default)]
    pub aws_profile: String,

    /// Binary providing `nbconvert`.
    #[serde(default = "default_jupyter_bin")]
    pub jupyter_bin: String,

    /// nbconvert HTML template name.
    #[serde(default = "default_template")]
    pub nbconvert_template: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            aws_bin: default_aws_bin(),
            aws_profile: String::new(),
            jupyter_bin: default_jupyter_bin(),
            nbconvert_template: default_template(),
        }
    }
}

impl ToolsConfig {
    #[must_use]
    pub fn aws_profile(&self) -> Option<&str> {
        let profile = self.aws_profile.trim();
        (!profile.is_empty()).then_some(profile)
    }
}
