mod client;
pub mod endpoints;
mod errors;
pub mod normalize;
mod query;
pub mod types;
pub use self::client::{Client, ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, ErrorKind, FieldError};
pub use self::normalize::{normalize_detail, normalize_list, ListShape, Page, PageRequest};
pub use self::query::{
    FavoriQuery, ListQuery, MessageQuery, Query, QueryCommon, SortDirection, UserQuery,
};
