pub mod account;
pub mod booking;
pub mod identity;
pub mod page;
pub mod schedule;
pub mod time_slot;
