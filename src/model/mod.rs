mod dto;
mod endpoint;
mod entities;
mod error;
mod request;
mod response;

pub use dto::*;
pub use endpoint::*;
pub use entities::*;
pub use error::*;
pub use request::*;
pub use response::*;
