mod repository_list_state;

pub use repository_list_state::*;
