//! User command and query handlers.

mod create_user;
mod delete_user;
mod get_user;
mod list_users;
mod patch_user;
mod replace_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use delete_user::{DeleteUserCommand, DeleteUserHandler};
pub use get_user::{GetUserHandler, GetUserQuery};
pub use list_users::ListUsersHandler;
pub use patch_user::{PatchUserCommand, PatchUserHandler};
pub use replace_user::{ReplaceUserCommand, ReplaceUserHandler};
