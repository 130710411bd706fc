mod date_format;

pub use date_format::*;
