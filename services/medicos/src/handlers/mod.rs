pub mod appointment;
pub mod auth;
pub mod patient;
pub mod record;
