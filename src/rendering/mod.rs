pub mod decode;
pub mod export;

pub use decode::load_grayscale;
pub use export::{encode_json, encode_png, write_json, write_png};
