pub mod error;
pub mod figure;
pub mod histogram;

pub use error::{HistError, Result};
pub use figure::Figure;
pub use histogram::{Bin, Histogram, DEFAULT_BINS, MAX_BINS};
