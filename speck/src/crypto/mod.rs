pub mod config;
pub mod error;
pub mod key_schedule;
pub mod round_function;
pub mod speck;
pub mod speck_v1;
