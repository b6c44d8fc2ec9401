multiversx_sc::imports!();

use common_constants::{STABLE_RATE_MODE, VARIABLE_RATE_MODE};
use common_errors::{
    ERROR_INSUFFICIENT_BORROW_ALLOWANCE, ERROR_INVALID_PAYMENT, ERROR_INVALID_RATE_MODE,
    ERROR_RESERVE_NOT_FOUND, ERROR_ZERO_AMOUNT,
};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    fn require_reserve(&self, asset: &TokenIdentifier) {
        require!(self.reserves().contains(asset), ERROR_RESERVE_NOT_FOUND);
    }

    fn require_rate_mode(&self, mode: u64) {
        require!(
            mode == STABLE_RATE_MODE || mode == VARIABLE_RATE_MODE,
            ERROR_INVALID_RATE_MODE
        );
    }

    /// The single fungible ESDT attached to the call, which must be a listed reserve.
    fn require_reserve_payment(&self) -> EsdtTokenPayment {
        let payment = self.call_value().single_esdt().clone();
        require!(payment.token_nonce == 0, ERROR_INVALID_PAYMENT);
        require!(payment.amount > 0u64, ERROR_ZERO_AMOUNT);
        self.require_reserve(&payment.token_identifier);

        payment
    }

    /// Consumes borrow allowance when `caller` opens debt for someone else.
    fn consume_borrow_allowance(
        &self,
        asset: &TokenIdentifier,
        delegator: &ManagedAddress,
        caller: &ManagedAddress,
        amount: &BigUint,
    ) {
        if delegator == caller {
            return;
        }

        self.borrow_allowance(asset, delegator, caller).update(|allowance| {
            require!(*allowance >= *amount, ERROR_INSUFFICIENT_BORROW_ALLOWANCE);
            *allowance -= amount;
        });
    }
}
