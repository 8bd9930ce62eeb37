pub mod appointment;
pub mod auth;
pub mod credential;
pub mod patient;
pub mod record;
pub mod seed;
