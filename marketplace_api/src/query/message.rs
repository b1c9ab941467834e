use url::Url;

use super::common::{Query, QueryCommon};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct MessageQuery {
    pub common: QueryCommon,
    /// Only messages the recipient has not opened yet.
    pub unread_only: bool,
}

impl Query for MessageQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if self.unread_only {
            url.query_pairs_mut().append_pair("est_lu", "false");
        }
        url
    }
}

impl MessageQuery {
    pub fn unread_only(mut self) -> Self {
        self.unread_only = true;
        self
    }
}
