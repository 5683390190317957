//! Binary codecs for the two fixed-record vector-file layouts.

pub mod error;
pub mod fvecs;
pub mod ivecs;

pub use error::{LoadError, LoadResult};
pub use fvecs::load_fvecs;
pub use ivecs::{load_ivecs, load_ivecs_fixed, save_ivecs};
