//! Preprocessing stages around the diffusion scan.
//!
//! # Pipeline
//!
//! 1. [`normalize`]: min-max scaling of the input to `[0, 1]`
//! 2. [`pad`]: replicate edge samples outward by the kernel radius
//! 3. *(diffusion scan)*
//! 4. [`crop`]: drop the padding band again
//!
//! Constant images have no dynamic range; [`DegeneratePolicy`] decides
//! whether they normalize to black or are rejected.

mod border;
mod normalize;

pub use border::{crop, pad};
pub use normalize::{normalize, DegeneratePolicy};
