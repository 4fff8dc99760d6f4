// Tuning constants shared by the model layer and the web frontend.

// Hex lattice background
pub const HEX_SIZE: f64 = 10.0; // nominal hexagon radius, drives lattice spacing
pub const DOT_SIZE: f64 = 6.0; // dot radius at full brightness
pub const DECAY_FACTOR: f64 = 0.01; // fraction lost per tick
pub const LINK_FACTOR: f64 = 0.1; // weight of the neighbour average
pub const CHARGE_RADIUS: f64 = 10.0; // pointer influence radius (px)
pub const MOUSE_CHARGE_STRENGTH: f64 = 0.1; // brightness added per tick under the pointer

// Decorative strokes drawn from every lattice point
pub const SPOKE_ANGLES_DEG: [f64; 3] = [-30.0, 30.0, 90.0];
pub const SPOKE_LENGTH_FACTOR: f64 = 2.0; // multiples of HEX_SIZE
pub const SPOKE_WIDTH: f64 = 0.1;

// Axial neighbour offsets as (row, col)
pub const HEX_NEIGHBOR_OFFSETS: [(i32, i32); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

// Diagram logical canvas (3:2)
pub const PLOT_WIDTH: f64 = 600.0;
pub const PLOT_HEIGHT: f64 = 400.0;
pub const PLOT_Y_MIN: f64 = -1.5;
pub const PLOT_Y_MAX: f64 = 1.5;

// Line-search diagrams: domain and fixed iterate
pub const LINE_SEARCH_X_MIN: f64 = 0.0;
pub const LINE_SEARCH_X_MAX: f64 = 6.0;
pub const LINE_SEARCH_ITERATE: f64 = 3.0;
pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_ARMIJO_C: f64 = 0.5;
pub const DEFAULT_WOLFE_C2: f64 = 0.9;

// Lipschitz diagrams
pub const SINE_LIPSCHITZ: f64 = 1.0;
pub const DEFAULT_CONE_SLOPE: f64 = 1.0;
pub const RATIO_HANDLE_A: f64 = -1.0;
pub const RATIO_HANDLE_B: f64 = 1.0;
pub const RATIO_DX_EPSILON: f64 = 1e-6;
pub const CONE_GRAB_FRACTION: f64 = 0.1; // grab radius as a fraction of the canvas width

// Shared drawing sizes
pub const HANDLE_RADIUS: f64 = 6.0;
pub const ARROWHEAD_LENGTH: f64 = 10.0;
pub const CURVE_WIDTH: f64 = 2.0;
pub const STEP_ARROW_WIDTH: f64 = 3.0;
pub const CONE_DASH: [f64; 2] = [5.0, 5.0];
