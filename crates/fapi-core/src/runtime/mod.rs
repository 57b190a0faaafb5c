//! External process collaborators: git and the uvicorn dev server

pub mod git;
pub mod server;

pub use git::init_repository;
pub use server::run_dev_server;
