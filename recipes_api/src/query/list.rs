use url::Url;

use super::{
    common::{Paginated, QueryCommon},
    Query,
};

/// Query for the unfiltered listing, sorted by rating on the server.
#[derive(Default, Clone, Debug)]
pub struct ListQuery {
    pub common: QueryCommon,
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

impl Paginated for ListQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        self.common.page
    }

    pub fn limit(&self) -> Option<i64> {
        self.common.limit
    }
}
