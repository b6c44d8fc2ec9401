multiversx_sc::imports!();

use common_errors::ERROR_INSUFFICIENT_LIQUIDITY;

use crate::storage;

#[multiversx_sc::module]
pub trait LiquidityModule: storage::Storage {
    fn add_liquidity(&self, asset: &TokenIdentifier, amount: &BigUint) {
        self.available_liquidity(asset)
            .update(|liquidity| *liquidity += amount);
    }

    fn take_liquidity(&self, asset: &TokenIdentifier, amount: &BigUint) {
        self.available_liquidity(asset).update(|liquidity| {
            require!(*liquidity >= *amount, ERROR_INSUFFICIENT_LIQUIDITY);
            *liquidity -= amount;
        });
    }

    fn open_debt(&self, asset: &TokenIdentifier, user: &ManagedAddress, amount: &BigUint) {
        self.debt_balance(asset, user).update(|debt| *debt += amount);
        self.debt_supply(asset).update(|debt| *debt += amount);
    }

    fn close_debt(&self, asset: &TokenIdentifier, user: &ManagedAddress, amount: &BigUint) {
        self.debt_balance(asset, user).update(|debt| *debt -= amount);
        self.debt_supply(asset).update(|debt| *debt -= amount);
    }

    /// Tokens held by the pool above the accounted liquidity.
    fn unaccounted_balance(&self, asset: &TokenIdentifier) -> BigUint {
        let held = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(asset.clone()), 0);
        let accounted = self.available_liquidity(asset).get();
        if held <= accounted {
            return BigUint::zero();
        }

        held - accounted
    }
}
