mod list_user_repositories;
pub use list_user_repositories::*;
