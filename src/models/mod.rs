pub mod app_state;
pub mod new_user;
pub mod pagination;
pub mod role;
pub mod user_record;
pub mod user_row;
pub mod users_page;

pub use app_state::AppState;
pub use new_user::NewUser;
pub use pagination::Pagination;
pub use role::Role;
pub use user_record::UserRecord;
pub use user_row::{SelectOption, UserRow};
pub use users_page::UsersPage;
