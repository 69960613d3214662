pub mod create_superuser;
pub mod create_user;
pub mod initdb;
pub mod record_prediction;

pub use create_superuser::create_superuser;
pub use create_user::create_user;
pub use initdb::init_database;
pub use record_prediction::record_prediction;
