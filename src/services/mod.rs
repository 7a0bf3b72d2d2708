pub mod users_controller;
pub mod users_state;

pub use users_controller::UsersController;
pub use users_state::UsersState;
