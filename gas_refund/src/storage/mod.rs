multiversx_sc::imports!();

use common_structs::OperationKind;

#[multiversx_sc::module]
pub trait Storage {
    /// EGLD owed to `user` and not yet claimed.
    #[view(getGasBalance)]
    #[storage_mapper("gas_balance")]
    fn gas_balance(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Share of the reported gas cost credited for `op_kind`, in basis points.
    #[view(getRefundRatio)]
    #[storage_mapper("refund_ratio")]
    fn refund_ratio(&self, op_kind: OperationKind) -> SingleValueMapper<u64>;

    #[view(getPoolWrapper)]
    #[storage_mapper("pool_wrapper")]
    fn pool_wrapper(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTotalFunded)]
    #[storage_mapper("total_funded")]
    fn total_funded(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalClaimed)]
    #[storage_mapper("total_claimed")]
    fn total_claimed(&self) -> SingleValueMapper<BigUint>;
}
