use serde::{Deserialize, Serialize};

pub const DEFAULT_WILDNESS: f64 = 0.7;
pub const WILDNESS_STEP: f64 = 0.1;

fn default_wildness() -> f64 {
    DEFAULT_WILDNESS
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Extra instruction appended to every prompt
    #[serde(default)]
    pub freeform: String,
    /// Sampling temperature in [0, 1]
    #[serde(default = "default_wildness")]
    pub wildness: f64,
    #[serde(default = "default_true")]
    pub auto_suggest: bool,
    #[serde(default = "default_true")]
    pub show_settings: bool,
    /// Developer view showing the prompt the current basis would produce
    #[serde(default)]
    pub show_prompt_preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            freeform: String::new(),
            wildness: DEFAULT_WILDNESS,
            auto_suggest: true,
            show_settings: true,
            show_prompt_preview: false,
        }
    }
}

impl Settings {
    pub fn set_wildness(&mut self, value: f64) {
        self.wildness = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
    }

    /// Step wildness and snap it to one decimal
    pub fn adjust_wildness(&mut self, delta: f64) -> f64 {
        let stepped = ((self.wildness + delta) * 10.0).round() / 10.0;
        self.set_wildness(stepped);
        self.wildness
    }

    /// Clamp values that may have been edited by hand
    pub fn normalized(mut self) -> Self {
        self.set_wildness(self.wildness);
        self
    }
}
