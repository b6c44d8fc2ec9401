#![no_std]

multiversx_sc::imports!();

pub mod storage;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

use common_constants::{DEFAULT_REFUND_RATIO_BPS, MAX_REFUND_RATIO_BPS};

/// Gas rebate ledger. The registered wrapper credits users per operation, users claim
/// the accumulated EGLD, and the contract is funded from protocol revenue.
#[multiversx_sc::contract]
pub trait GasRefund:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// # Arguments
    /// - `pool_wrapper`: The only address allowed to credit rebates.
    #[init]
    fn init(&self, pool_wrapper: ManagedAddress) {
        require!(!pool_wrapper.is_zero(), ERROR_INVALID_ADDRESS);
        self.pool_wrapper().set(&pool_wrapper);

        for operation in OperationKind::ALL {
            self.refund_ratio(operation).set(DEFAULT_REFUND_RATIO_BPS);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Credits `user` with `amount * ratio / BPS` EGLD for an operation of kind `op_kind`.
    ///
    /// # Arguments
    /// - `user`: Account that paid for the operation.
    /// - `amount`: Gas cost of the operation, in atto-EGLD.
    /// - `op_kind`: Operation the cost belongs to.
    #[endpoint(addGasRefund)]
    fn add_gas_refund(&self, user: ManagedAddress, amount: BigUint, op_kind: OperationKind) {
        require!(
            self.blockchain().get_caller() == self.pool_wrapper().get(),
            ERROR_ONLY_POOL_WRAPPER
        );

        let credited = self.percent_mul_floor(&amount, self.refund_ratio(op_kind).get());
        if credited > 0u64 {
            self.gas_balance(&user).update(|balance| *balance += &credited);
        }

        self.gas_refund_credited_event(&user, op_kind, &amount, &credited);
    }

    #[only_owner]
    #[endpoint(setRefundRatio)]
    fn set_refund_ratio(&self, op_kind: OperationKind, ratio_bps: u64) {
        require!(ratio_bps <= MAX_REFUND_RATIO_BPS, ERROR_INVALID_REFUND_RATIO);

        self.refund_ratio(op_kind).set(ratio_bps);
        self.refund_ratio_updated_event(op_kind, ratio_bps);
    }

    #[only_owner]
    #[endpoint(setPoolWrapper)]
    fn set_pool_wrapper(&self, pool_wrapper: ManagedAddress) {
        require!(!pool_wrapper.is_zero(), ERROR_INVALID_ADDRESS);
        self.pool_wrapper().set(&pool_wrapper);
    }

    /// Pays the caller's whole gas balance in EGLD and resets it. Nothing is paid when the
    /// balance is zero; the call fails without paying anything if the contract cannot
    /// cover the full balance.
    #[endpoint(claimGas)]
    fn claim_gas(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.gas_balance(&caller).take();
        if amount == 0u64 {
            return amount;
        }

        let available = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(available >= amount, ERROR_INSUFFICIENT_GAS_FUNDS);

        self.total_claimed().update(|total| *total += &amount);
        self.tx().to(&caller).egld(&amount).transfer();

        self.gas_claimed_event(&caller, &amount);
        amount
    }

    /// Tops up the EGLD backing the rebates.
    #[payable("EGLD")]
    #[endpoint(fund)]
    fn fund(&self) {
        let amount = self.call_value().egld().clone_value();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        self.total_funded().update(|total| *total += &amount);
        self.gas_funded_event(&self.blockchain().get_caller(), &amount);
    }
}
