use std::fmt;

/// Backing storage for the grid could not be obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocationError {
    /// Width or height was zero
    Empty { width: usize, height: usize },
    /// width * height does not fit in memory addressing
    Overflow { width: usize, height: usize },
    /// The allocator refused the request
    OutOfMemory { cells: usize },
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::Empty { width, height } => {
                write!(f, "grid of {width}x{height} cells has no storage")
            }
            AllocationError::Overflow { width, height } => {
                write!(f, "grid of {width}x{height} cells overflows addressable memory")
            }
            AllocationError::OutOfMemory { cells } => {
                write!(f, "failed to allocate memory for {cells} cells")
            }
        }
    }
}

impl std::error::Error for AllocationError {}

/// A single draw request failed. Never fatal.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    InvalidRect { x: f32, y: f32, w: f32, h: f32 },
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidRect { x, y, w, h } => {
                write!(f, "invalid rectangle ({x}, {y}, {w}, {h})")
            }
            RenderError::Backend(msg) => write!(f, "draw request failed: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Fatal failures while bringing the program up.
/// Each stage maps to its own process exit status.
#[derive(Debug)]
pub enum StartupError {
    Grid(AllocationError),
}

impl StartupError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            StartupError::Grid(_) => 2,
        }
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Grid(e) => write!(f, "grid initialization failed: {e}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Grid(e) => Some(e),
        }
    }
}

impl From<AllocationError> for StartupError {
    fn from(e: AllocationError) -> Self {
        StartupError::Grid(e)
    }
}
