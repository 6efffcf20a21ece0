pub mod feedback;
pub mod models;
pub mod services;
pub mod shell;
