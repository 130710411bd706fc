mod fetcher;
mod transport;
mod use_case;

pub use fetcher::*;
pub use transport::*;
pub use use_case::*;
