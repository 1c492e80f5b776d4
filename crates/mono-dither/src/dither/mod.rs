//! Error diffusion dithering.
//!
//! # Methods
//!
//! Three diffusion kernels are registered:
//!
//! - **simple2D**: error split evenly between right and bottom neighbors
//! - **floyd-steinberg**: classic 4-neighbor kernel (default)
//! - **jarvis-judice-ninke**: 12-neighbor kernel over 3 rows, smoother gradients
//!
//! # Architecture
//!
//! The methods differ only in data. A single scan, [`diffuse`], is driven by
//! the [`Kernel`] that [`Method::kernel`] selects.

mod kernel;
mod scan;

pub use kernel::*;
pub use scan::diffuse;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::DitherError;

/// Dithering method selection.
///
/// Parses from and displays as the method identifiers `"simple2D"`,
/// `"floyd-steinberg"` and `"jarvis-judice-ninke"`.
///
/// # Example
///
/// ```
/// use mono_dither::Method;
///
/// let method: Method = "jarvis-judice-ninke".parse().unwrap();
/// assert_eq!(method, Method::JarvisJudiceNinke);
/// assert_eq!(method.kernel().radius, 2);
/// assert_eq!(Method::default().to_string(), "floyd-steinberg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Method {
    /// Right and bottom neighbors, half the error each.
    #[serde(rename = "simple2D")]
    Simple2D,

    /// Floyd-Steinberg error diffusion (4 neighbors).
    #[default]
    #[serde(rename = "floyd-steinberg")]
    FloydSteinberg,

    /// Jarvis-Judice-Ninke error diffusion (12 neighbors, radius 2).
    #[serde(rename = "jarvis-judice-ninke")]
    JarvisJudiceNinke,
}

impl Method {
    /// Every registered method, in table order.
    pub const ALL: [Method; 3] = [
        Method::Simple2D,
        Method::FloydSteinberg,
        Method::JarvisJudiceNinke,
    ];

    /// The identifier used on the command line and in config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Simple2D => "simple2D",
            Method::FloydSteinberg => "floyd-steinberg",
            Method::JarvisJudiceNinke => "jarvis-judice-ninke",
        }
    }

    /// The diffusion kernel for this method.
    pub const fn kernel(self) -> &'static Kernel {
        match self {
            Method::Simple2D => &SIMPLE_2D,
            Method::FloydSteinberg => &FLOYD_STEINBERG,
            Method::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DitherError::UnknownMethod(s.to_string()))
    }
}
