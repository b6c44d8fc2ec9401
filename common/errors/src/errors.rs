#![no_std]

pub static ERROR_ZERO_AMOUNT: &[u8] = b"ZeroAmount";

pub static ERROR_INVALID_MSG_VALUE: &[u8] = b"InvalidMsgValue";

pub static ERROR_INVALID_FLASH_LOAN: &[u8] = b"InvalidFlashLoan";

pub static ERROR_WRAP_MISMATCH: &[u8] = b"WrapMismatch";

pub static ERROR_ONLY_POOL_WRAPPER: &[u8] = b"only pool wrapper";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Payment does not match the requested asset and amount.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset.";

pub static ERROR_FLASH_LOAN_ONGOING: &[u8] = b"Flash loan already ongoing.";

pub static ERROR_INVALID_FLASH_LOAN_PAYLOAD: &[u8] = b"Invalid flash loan payload.";

pub static ERROR_INVALID_ADDRESS: &[u8] = b"Invalid address.";

pub static ERROR_INVALID_RATE_MODE: &[u8] = b"Invalid interest rate mode.";

// Gas rebate ledger
pub static ERROR_INVALID_REFUND_RATIO: &[u8] = b"Refund ratio exceeds 100%.";

pub static ERROR_INSUFFICIENT_GAS_FUNDS: &[u8] = b"Not enough EGLD to pay the gas refund.";

// Yield distributor
pub static ERROR_ONLY_RECEIPT_SOURCE: &[u8] = b"Caller is not the receipt token source.";

pub static ERROR_BALANCE_OUT_OF_SYNC: &[u8] = b"Tracked balance out of sync.";

pub static ERROR_INVALID_YIELD_PAYMENT: &[u8] = b"Yield payment does not match the yield token and amount.";

// Pool
pub static ERROR_RESERVE_NOT_FOUND: &[u8] = b"Reserve not found.";

pub static ERROR_RESERVE_ALREADY_EXISTS: &[u8] = b"Reserve already exists.";

pub static ERROR_INSUFFICIENT_RECEIPT_BALANCE: &[u8] = b"Not enough receipt balance.";

pub static ERROR_INSUFFICIENT_RECEIPT_ALLOWANCE: &[u8] = b"Not enough receipt allowance.";

pub static ERROR_INSUFFICIENT_BORROW_ALLOWANCE: &[u8] = b"Not enough borrow allowance.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Not enough liquidity in the reserve.";

pub static ERROR_NO_DEBT: &[u8] = b"No debt to repay.";

pub static ERROR_INVALID_FLASH_LOAN_ARGS: &[u8] = b"Flash loan assets, amounts and modes differ in length.";

pub static ERROR_FLASH_LOAN_NOT_EXECUTED: &[u8] = b"Flash loan receiver returned false.";

pub static ERROR_INVALID_FLASHLOAN_REPAYMENT: &[u8] = b"Invalid flashloan repayment.";

pub static ERROR_INVALID_FLASH_LOAN_PREMIUM: &[u8] = b"Flash loan premium too high.";

pub static ERROR_DISTRIBUTOR_ATTACH_WITH_SUPPLY: &[u8] =
    b"Yield distributor must be attached before the first supply.";
