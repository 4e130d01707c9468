pub mod response_generator;
pub mod run_driver;
pub mod schema_loader;
pub mod submission_client;
