//! Reusable UI components.
//!
//! - `TabSelector` - navigation tab strip with click spans
//! - `InputField` - boxed text input rendered as lines
//! - `StatusIndicator` - spinner and status lines
//! - `DialogFrame` - rounded frame for overlays

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig};
pub use input_field::{
    calculate_input_field_height, render_input_field, InputFieldConfig, INPUT_BOX_OFFSET,
};
pub use status_indicator::{
    get_spinner_char, render_status_indicator, spinner_frame, StatusIndicatorType,
    SPINNER_FRAMES,
};
pub use tab_selector::{render_tab_selector, tab_strip_width, TabSpan};
