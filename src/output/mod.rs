//! Output encoders for point previews (PNG, terminal).

mod png_encoder;
mod terminal;

pub use png_encoder::PngEncoder;
pub use terminal::{TerminalEncoder, TerminalMode};
