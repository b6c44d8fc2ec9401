use multiversx_sc::types::{TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const ROUND_DURATION: u64 = 1_000;

pub const YIELD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XOXNO-abcdef");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
// Plays the receipt source in the hook driven tests
pub const RECEIPT_SOURCE: TestAddress = TestAddress::new("receipt-source");
pub const HOLDER_1: TestAddress = TestAddress::new("holder1");
pub const HOLDER_2: TestAddress = TestAddress::new("holder2");
pub const HOLDER_3: TestAddress = TestAddress::new("holder3");

pub const FLASH_LOAN_PREMIUM_BPS: u64 = 9;

pub const YIELD_DISTRIBUTOR_PATH: MxscPath =
    MxscPath::new("../output/yield-distributor.mxsc.json");
pub const LENDING_POOL_MOCK_PATH: MxscPath =
    MxscPath::new("../lending_pool_mock/output/lending-pool-mock.mxsc.json");
