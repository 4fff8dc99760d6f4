/// Page bindings and frontend tuning.
///
/// Element ids match the markup of the diagram pages; a diagram whose page
/// lacks one of its controls fails to mount and logs why.
// Canvas discovery
pub const DIAGRAM_ATTR: &str = "data-diagram";
pub const DIAGRAM_SELECTOR: &str = "canvas[data-diagram]";

// Slider inputs and their numeric readouts
pub const SLOPE_SLIDER_ID: &str = "slopeSlider";
pub const SLOPE_READOUT_ID: &str = "slopeVal";
pub const ALPHA_SLIDER_ID: &str = "alphaSlider";
pub const ALPHA_READOUT_ID: &str = "alphaVal";
pub const ARMIJO_C_SLIDER_ID: &str = "cSlider";
pub const ARMIJO_C_READOUT_ID: &str = "cVal";
pub const WOLFE_C2_SLIDER_ID: &str = "c2Slider";
pub const WOLFE_C2_READOUT_ID: &str = "c2Val";

// Free-text condition report under the line-search canvases
pub const INFO_ID: &str = "info";

pub const LABEL_FONT: &str = "100% Tahoma, Geneva, Verdana, sans-serif";
pub const READOUT_DECIMALS: usize = 2;

// Debug frame statistics cadence
pub const FRAME_STATS_WINDOW_SECS: f64 = 5.0;
