mod edit_history;

pub use edit_history::{DEFAULT_HISTORY_LIMIT, EditHistory};
