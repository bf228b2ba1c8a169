//! Solver limits, playback defaults and rendering constants

// Board size limits accepted by the command-line front end
/// Smallest board size accepted by the CLI
pub const MIN_BOARD_SIZE: usize = 1;
/// Largest board size accepted by the CLI
pub const MAX_BOARD_SIZE: usize = 10;
/// Board size used when none is given
pub const DEFAULT_BOARD_SIZE: usize = 8;

// Default values for configurable parameters
/// Fixed seed for reproducible random initial queens
pub const DEFAULT_SEED: u64 = 42;

// Playback speed slider, mirrored into a per-step delay
/// Slowest slider value
pub const MIN_SPEED: u64 = 100;
/// Fastest slider value
pub const MAX_SPEED: u64 = 2000;
/// Slider granularity
pub const SPEED_STEP: u64 = 100;
/// Delay in milliseconds is this value minus the slider value
pub const SPEED_INVERSION_MS: u64 = 2100;
/// Per-step delay before the speed is changed
pub const DEFAULT_PLAYBACK_DELAY_MS: u64 = 500;

// Output settings
/// Edge length of one board square in rendered images
pub const CELL_SIZE_PX: u32 = 32;
/// Gap between boards on the solution sheet
pub const SHEET_GAP_PX: u32 = 8;
/// Boards per row on the solution sheet
pub const SHEET_COLUMNS: usize = 8;
/// Upper bound on frames written to an animated trace
pub const DEFAULT_MAX_FRAMES: usize = 1500;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// The last frame is shown this many times longer than the others
pub const FINAL_FRAME_HOLD: u32 = 6;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Palette (RGBA)
/// Light board square
pub const LIGHT_SQUARE: [u8; 4] = [238, 238, 210, 255];
/// Dark board square
pub const DARK_SQUARE: [u8; 4] = [118, 150, 86, 255];
/// Queen body
pub const QUEEN_COLOR: [u8; 4] = [30, 30, 30, 255];
/// Outline for the square currently acted on
pub const ACTIVE_COLOR: [u8; 4] = [40, 110, 220, 255];
/// Queens involved in a conflict
pub const CONFLICT_COLOR: [u8; 4] = [210, 40, 40, 255];
/// Tint applied to frames showing a solution
pub const SOLUTION_TINT: [u8; 4] = [90, 200, 120, 255];
/// Background behind boards on the solution sheet
pub const SHEET_BACKGROUND: [u8; 4] = [255, 255, 255, 0];
