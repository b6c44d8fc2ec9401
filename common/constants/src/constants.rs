#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

/// One whole token unit for 18 decimal assets
pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const BPS: u64 = 10_000; // 100%

/// Interest rate modes understood by the pool
pub const STABLE_RATE_MODE: u64 = 1;
pub const VARIABLE_RATE_MODE: u64 = 2;

/// Flash loan mode that must be repaid inside the callback
pub const FLASH_LOAN_MODE_NO_DEBT: u64 = 0;

pub const REFERRAL_CODE: u16 = 0;

pub const FIRST_ROUND: u64 = 1;

/// Gas charged by the protocol before any contract code runs
pub const BASE_TX_GAS: u64 = 50_000;

/// Network minimum gas price, in atto-EGLD per gas unit
pub const MIN_GAS_PRICE: u64 = 1_000_000_000;

/// Refund ratio applied to every operation kind at deployment
pub const DEFAULT_REFUND_RATIO_BPS: u64 = BPS;
pub const MAX_REFUND_RATIO_BPS: u64 = BPS;

pub const MAX_FLASH_LOAN_PREMIUM_BPS: u64 = 1_000; // 10%
