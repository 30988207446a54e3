mod common;
pub use self::common::{Paginated, Query, QueryCommon};

mod list;
pub use self::list::ListQuery;

mod search;
pub use self::search::{SearchFilter, SearchQuery};
