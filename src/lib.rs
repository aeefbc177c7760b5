pub mod ads;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod health;
pub mod repo;
pub mod state;
pub mod users;
