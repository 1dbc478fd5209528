mod memory_user_store;
mod pg_user_store;
mod user_store;

pub use memory_user_store::InMemoryUserStore;
pub use pg_user_store::PgUserStore;
pub use user_store::{UserStore, UserStoreError};
