use crate::core::format_px;
use std::collections::HashMap;
use std::fmt::Write;

/// Element ids of the form's input fields
pub mod inputs {
    pub const WEIGHT: &str = "weight";
    pub const HEIGHT: &str = "height";
    pub const GENDER: &str = "gender";
    pub const AGE: &str = "age";
}

/// Element ids of the result regions
pub mod regions {
    pub const BMI_VALUE: &str = "bmi-value";
    pub const BMI_CATEGORY: &str = "bmi-category";
    pub const BMI_ADVICE: &str = "bmi-advice";
    pub const IDEAL_WEIGHT: &str = "ideal-weight";
    pub const WEIGHT_STATUS: &str = "weight-status";

    pub const ALL: [&str; 5] = [BMI_VALUE, BMI_CATEGORY, BMI_ADVICE, IDEAL_WEIGHT, WEIGHT_STATUS];
}

/// Width in characters of the text meter drawn by [`Page::render`]
const RENDER_METER_CHARS: usize = 50;

/// In-memory page surface the form handler reads from and writes to
///
/// Holds the raw text of the input fields, the text of each result region,
/// the result container's visibility, the meter's rendered width and the
/// indicator's inline `left` offset.
#[derive(Debug, Clone)]
pub struct Page {
    inputs: HashMap<String, String>,
    text: HashMap<String, String>,
    result_hidden: bool,
    meter_width: f64,
    indicator_left: Option<f64>,
}

impl Page {
    /// Create an empty page with a hidden result container
    pub fn new(meter_width: f64) -> Self {
        Self {
            inputs: HashMap::new(),
            text: HashMap::new(),
            result_hidden: true,
            meter_width,
            indicator_left: None,
        }
    }

    /// Create a page with all four form fields filled in
    pub fn with_form(meter_width: f64, weight: &str, height: &str, gender: &str, age: &str) -> Self {
        let mut page = Self::new(meter_width);
        page.set_value(inputs::WEIGHT, weight);
        page.set_value(inputs::HEIGHT, height);
        page.set_value(inputs::GENDER, gender);
        page.set_value(inputs::AGE, age);
        page
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.inputs.insert(id.to_string(), value.into());
    }

    /// Current text of an input field; an absent field reads as empty
    pub fn value(&self, id: &str) -> &str {
        self.inputs.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn text_content(&self, id: &str) -> Option<&str> {
        self.text.get(id).map(String::as_str)
    }

    pub fn set_text_content(&mut self, id: &str, text: impl Into<String>) {
        self.text.insert(id.to_string(), text.into());
    }

    /// Show the result container
    pub fn reveal_result(&mut self) {
        self.result_hidden = false;
    }

    pub fn is_result_hidden(&self) -> bool {
        self.result_hidden
    }

    pub fn meter_width(&self) -> f64 {
        self.meter_width
    }

    /// Indicator offset in pixels, if one has been set
    pub fn indicator_left(&self) -> Option<f64> {
        self.indicator_left
    }

    /// Indicator offset as an inline style value, e.g. `"79px"`
    pub fn indicator_style(&self) -> Option<String> {
        self.indicator_left.map(format_px)
    }

    pub fn set_indicator_left(&mut self, offset: f64) {
        self.indicator_left = Some(offset);
    }

    /// Render the result container as text
    ///
    /// A hidden container renders as an empty string.
    pub fn render(&self) -> String {
        if self.result_hidden {
            return String::new();
        }

        let labels = ["BMI", "Category", "Advice", "Ideal weight", "Weight status"];
        let mut out = String::new();
        for (label, id) in labels.iter().zip(regions::ALL) {
            let _ = writeln!(out, "{:<14} {}", format!("{}:", label), self.text_content(id).unwrap_or(""));
        }

        let mut bar = vec!['-'; RENDER_METER_CHARS];
        if let Some(offset) = self.indicator_left {
            if self.meter_width > 0.0 {
                let ratio = (offset / self.meter_width).clamp(0.0, 1.0);
                let idx = ((ratio * RENDER_METER_CHARS as f64) as usize).min(RENDER_METER_CHARS - 1);
                bar[idx] = '|';
            }
        }
        let _ = writeln!(out, "15 [{}] 40", bar.into_iter().collect::<String>());

        out
    }
}
