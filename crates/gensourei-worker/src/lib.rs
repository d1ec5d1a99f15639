//! Background tasks for Gensourei.
//!
//! This crate provides:
//! - A cron scheduler owned by the server process
//! - The periodic allow-list refresh, run once per TTL
//! - The expired-session purge

pub mod jobs;
pub mod scheduler;

pub use scheduler::CronScheduler;
