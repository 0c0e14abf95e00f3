pub mod health;
pub mod list;
pub mod create;
pub mod get;
pub mod update;
pub mod delete;
pub mod index;

pub use health::health_handler;
pub use list::list_handler;
pub use create::create_handler;
pub use get::get_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use index::{index_handler, submit_handler};
