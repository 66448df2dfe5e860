mod conversion;
mod string;

// conversion
pub use conversion::{ansi256_to_ansi16, rgb_to_ansi16, rgb_to_ansi256};

// string
pub use string::hex_to_rgb;
