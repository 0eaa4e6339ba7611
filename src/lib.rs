pub mod config;
pub mod console_interface;
pub mod core;
pub mod input;
pub mod models;
pub mod session;

#[cfg(test)]
mod test;
