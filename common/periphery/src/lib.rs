#![no_std]

pub mod config;
pub mod leverage;
pub mod native;
pub mod rescue;
