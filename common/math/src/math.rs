#![no_std]

use common_constants::{BPS, RAY};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / c` rounded down. Returns zero when `c` is zero.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        if *c == 0u64 {
            return BigUint::zero();
        }

        a * b / c
    }

    /// `a * b / c` rounded half up. Returns zero when `c` is zero.
    fn mul_div_half_up(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        if *c == 0u64 {
            return BigUint::zero();
        }

        let half = c / &BigUint::from(2u64);
        (a * b + half) / c
    }

    /// Basis-point share of an integer amount, rounded half up.
    fn percent_mul_half_up(&self, amount: &BigUint, bps: u64) -> BigUint {
        self.mul_div_half_up(amount, &BigUint::from(bps), &BigUint::from(BPS))
    }

    /// Basis-point share of an integer amount, rounded down.
    fn percent_mul_floor(&self, amount: &BigUint, bps: u64) -> BigUint {
        self.mul_div_floor(amount, &BigUint::from(bps), &BigUint::from(BPS))
    }

    /// RAY scaled `numerator / denominator`, zero for an empty denominator.
    fn ray_ratio(&self, numerator: &BigUint, denominator: &BigUint) -> BigUint {
        self.mul_div_half_up(numerator, &BigUint::from(RAY), denominator)
    }
}
