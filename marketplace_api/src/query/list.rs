use url::Url;

use super::common::{Query, QueryCommon};

/// Query for resources that only take the common parameters.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub common: QueryCommon,
}

impl Query for ListQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
