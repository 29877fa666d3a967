pub mod cli;
pub mod config;
pub mod database;
pub mod models;
pub mod schema;
pub mod seed;
pub mod startup;
pub mod utils;

pub use config::Config;
pub use database::{Database, TaskFilter};
pub use models::{
    Priority, RecurrencePeriod, Task, TaskCompletion, TaskGroup, TaskStatus, User,
};
pub use utils::Profile;
