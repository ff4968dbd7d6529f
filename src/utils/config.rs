//! Configuration and constants for the statistics pipeline.

/// Per-function time above which a module is flagged as containing an outlier
pub const TAIL_THRESHOLD_SECS: f64 = 60.0;

/// Histogram bin width in extended mode, and the minor x-axis tick interval
pub const HISTOGRAM_BIN_WIDTH_SECS: f64 = 5.0;

/// Fixed histogram bin count in basic mode
pub const BASIC_BIN_COUNT: usize = 20;

/// Divisor selecting the "top 1%" of a module's functions (floor(count / 100))
pub const TOP_SHARE_DIVISOR: usize = 100;

/// Default output path for the histogram image
pub const DEFAULT_HISTOGRAM_PATH: &str = "fastly_times.svg";

// Measurement-row layouts
// Basic rows:    [id, time, blocks, ...]
// Extended rows: [id, _, cfg, stack, heap, call, ...]
pub const BASIC_MIN_ARITY: usize = 3;
pub const BASIC_TIME_INDEX: usize = 1;
pub const BASIC_BLOCKS_INDEX: usize = 2;

pub const EXTENDED_MIN_ARITY: usize = 6;
pub const EXTENDED_FIRST_PHASE_INDEX: usize = 2;
