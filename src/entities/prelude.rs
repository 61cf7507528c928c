pub use super::user_search::Entity as UserSearch;
