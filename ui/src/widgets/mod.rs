mod pagination;
mod panel;
mod search;
pub mod table;

pub use pagination::{PageJumpInput, pagination_bar, parse_page_jump};
pub use panel::athlete_panel;
pub use search::{SEARCH_HINT, search_bar};
