multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_ASSET, ERROR_WRAP_MISMATCH};
use common_proxies::wegld_proxy;

use crate::config;

#[multiversx_sc::module]
pub trait NativeModule: config::ConfigModule {
    /// Maps the EGLD sentinel onto WEGLD; any other asset must be a fungible ESDT.
    fn resolve_underlying(&self, asset: &EgldOrEsdtTokenIdentifier) -> TokenIdentifier {
        if asset.is_egld() {
            return self.wegld_token_id().get();
        }

        let token = asset.clone().unwrap_esdt();
        require!(token.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);
        token
    }

    /// Wraps `amount` EGLD 1:1 and checks the swap handed back exactly that much WEGLD.
    fn wrap_egld(&self, amount: &BigUint) {
        let wrapped = self
            .tx()
            .to(self.wegld_swap_address().get())
            .typed(wegld_proxy::EgldEsdtSwapProxy)
            .wrap_egld()
            .egld(amount)
            .returns(ReturnsResult)
            .sync_call();

        require!(
            wrapped.token_identifier == self.wegld_token_id().get() && &wrapped.amount == amount,
            ERROR_WRAP_MISMATCH
        );
    }

    fn unwrap_wegld(&self, amount: &BigUint) {
        self.tx()
            .to(self.wegld_swap_address().get())
            .typed(wegld_proxy::EgldEsdtSwapProxy)
            .unwrap_egld()
            .single_esdt(&self.wegld_token_id().get(), 0, amount)
            .sync_call();
    }
}
