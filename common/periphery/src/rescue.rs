multiversx_sc::imports!();

use common_errors::ERROR_ZERO_AMOUNT;

#[multiversx_sc::module]
pub trait RescueModule: common_events::EventsModule {
    /// Sends tokens stranded in the contract to `to`.
    ///
    /// # Arguments
    /// - `token`: EGLD or any fungible ESDT held by the contract.
    /// - `to`: Recipient of the swept amount.
    /// - `amount`: Amount to sweep.
    #[only_owner]
    #[endpoint(rescueToken)]
    fn rescue_token(&self, token: EgldOrEsdtTokenIdentifier, to: ManagedAddress, amount: BigUint) {
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        self.tx()
            .to(&to)
            .egld_or_single_esdt(&token, 0, &amount)
            .transfer();

        self.token_rescued_event(&token, &to, &amount);
    }
}
