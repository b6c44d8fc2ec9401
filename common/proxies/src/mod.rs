#![no_std]

pub mod flash_receiver_proxy;
pub mod gas_refund_proxy;
pub mod leverage_depositor_proxy;
pub mod pool_proxy;
pub mod pool_wrapper_proxy;
pub mod wegld_proxy;
pub mod yield_distributor_proxy;
