mod common;
pub use self::common::{Query, QueryCommon, SortDirection};

mod list;
pub use self::list::ListQuery;

mod favori;
pub use self::favori::FavoriQuery;

mod utilisateur;
pub use self::utilisateur::UserQuery;

mod message;
pub use self::message::MessageQuery;
