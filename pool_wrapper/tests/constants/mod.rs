use multiversx_sc::types::{TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const FLASH_LOAN_PREMIUM_BPS: u64 = 9;
pub const VARIABLE_RATE: u64 = 2;
pub const BASE_GAS_COST: u64 = 50_000 * 1_000_000_000;

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: u64 = 6;
pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");

/// Upgradeable | Readable
pub const NON_PAYABLE_CODE_METADATA: &str = "0x0500";

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const LIQUIDITY_PROVIDER: TestAddress = TestAddress::new("liquidity-provider");
pub const USER_ADDRESS: TestAddress = TestAddress::new("user");
pub const OTHER_USER_ADDRESS: TestAddress = TestAddress::new("other-user");

pub const POOL_WRAPPER_PATH: MxscPath = MxscPath::new("../output/pool-wrapper.mxsc.json");
pub const LENDING_POOL_MOCK_PATH: MxscPath =
    MxscPath::new("../lending_pool_mock/output/lending-pool-mock.mxsc.json");
pub const GAS_REFUND_PATH: MxscPath = MxscPath::new("../gas_refund/output/gas-refund.mxsc.json");
pub const YIELD_DISTRIBUTOR_PATH: MxscPath =
    MxscPath::new("../yield_distributor/output/yield-distributor.mxsc.json");
pub const WEGLD_SWAP_PATH: MxscPath =
    MxscPath::new("../common/wegld-swap/output/multiversx-wegld-swap-sc.mxsc.json");
