//! CLI command implementations.

pub mod check_reservation;
pub mod check_service;
pub mod cleanup_table;
pub mod delete_old_active;
pub mod find_old_service;
pub mod find_old_waitlist;
pub mod retrain;
pub mod train;
