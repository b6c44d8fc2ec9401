multiversx_sc::imports!();

use common_constants::{BASE_TX_GAS, MIN_GAS_PRICE};
use common_errors::ERROR_INVALID_ADDRESS;
use common_proxies::gas_refund_proxy;
use common_structs::OperationKind;

#[multiversx_sc::module]
pub trait GasRebateModule {
    /// Points the wrapper at the gas rebate ledger. Until set, no rebates are credited.
    #[only_owner]
    #[endpoint(setGasRefund)]
    fn set_gas_refund(&self, gas_refund_address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&gas_refund_address),
            ERROR_INVALID_ADDRESS
        );

        self.gas_refund_address().set(&gas_refund_address);
    }

    /// Reports the gas spent since `gas_at_entry`, priced at the network minimum, to the ledger.
    fn credit_gas(&self, user: &ManagedAddress, gas_at_entry: u64, operation: OperationKind) {
        let ledger = self.gas_refund_address();
        if ledger.is_empty() {
            return;
        }

        let gas_used = gas_at_entry
            .saturating_sub(self.blockchain().get_gas_left())
            .saturating_add(BASE_TX_GAS);
        let gas_cost = BigUint::from(gas_used) * BigUint::from(MIN_GAS_PRICE);

        self.tx()
            .to(ledger.get())
            .typed(gas_refund_proxy::GasRefundProxy)
            .add_gas_refund(user, gas_cost, operation)
            .sync_call();
    }

    #[view(getGasRefundAddress)]
    #[storage_mapper("gas_refund_address")]
    fn gas_refund_address(&self) -> SingleValueMapper<ManagedAddress>;
}
