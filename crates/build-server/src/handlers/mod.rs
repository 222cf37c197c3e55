pub mod build;
pub mod health;
