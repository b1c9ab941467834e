//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

use crate::normalize::PageRequest;
use crate::types::Statut;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination, search, status filtering and sorting.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a reference to the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// The page and page size this query asks for, used by the normalizer.
    fn page_request(&self) -> PageRequest {
        let common = self.common();
        PageRequest {
            page: Some(common.page),
            limit: common.limit,
        }
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Free-text search, matched server-side.
    fn with_search(mut self, search: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().search = Some(search.to_string());
        self
    }

    /// Keeps only entities with the given status.
    fn with_statut(mut self, statut: Statut) -> Self
    where
        Self: Sized,
    {
        self.get_common().statut = Some(statut);
        self
    }

    /// Sorts by the given server-side field name.
    fn with_sort_by(mut self, sort_by: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_by = Some(sort_by.to_string());
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = sort_direction;
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first).
    Asc,
    /// Descending order (newest/largest first). This is the default.
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by all query types: pagination, search, status and sort.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u64,
    /// Results per page. `None` uses the API default.
    pub limit: Option<u64>,
    /// Free-text search.
    pub search: Option<String>,
    /// Status filter.
    pub statut: Option<Statut>,
    /// Server-side field to sort by. `None` uses the API default and omits `order`.
    pub sort_by: Option<String>,
    /// Sort direction. Defaults to descending.
    pub sort_direction: SortDirection,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            limit: None,
            search: None,
            statut: None,
            sort_by: None,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl QueryCommon {
    /// Appends the common pagination, search and sort parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        };
        if let Some(statut) = self.statut {
            url.query_pairs_mut()
                .append_pair("statut", statut.to_string().as_str());
        };
        if let Some(sort_by) = &self.sort_by {
            url.query_pairs_mut()
                .append_pair("sort", sort_by.as_str())
                .append_pair("order", self.sort_direction.to_string().as_str());
        };
        url
    }
}
