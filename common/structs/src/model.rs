#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Operation kinds the wrapper reports to the gas rebate ledger.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum OperationKind {
    Supply,
    Withdraw,
    Borrow,
    Repay,
    LeverageDeposit,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Supply,
        OperationKind::Withdraw,
        OperationKind::Borrow,
        OperationKind::Repay,
        OperationKind::LeverageDeposit,
    ];
}

/// A settled distribution epoch.
///
/// `yield_per_point` is RAY scaled and kept for reporting; shares of a round an account
/// touched are computed directly from `points * yield_amount / total_points`.
/// `cumulative_yield_index` sums, up to and including this round, the RAY scaled yield
/// one unit of balance earns by holding through a whole round.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct Round<M: ManagedTypeApi> {
    pub id: u64,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub total_points: BigUint<M>,
    pub yield_amount: BigUint<M>,
    pub yield_per_point: BigUint<M>,
    pub cumulative_yield_index: BigUint<M>,
}

impl<M: ManagedTypeApi> Round<M> {
    pub fn has_participants(&self) -> bool {
        self.total_points > 0u64
    }

    pub fn duration(&self) -> u64 {
        self.end_timestamp.saturating_sub(self.start_timestamp)
    }

    /// Share of the round yield owed for `points`, rounded down.
    pub fn share_of(&self, points: &BigUint<M>) -> BigUint<M> {
        if !self.has_participants() {
            return BigUint::zero();
        }

        points * &self.yield_amount / &self.total_points
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct UserAccount<M: ManagedTypeApi> {
    pub balance: BigUint<M>,
    pub last_checkpoint_time: u64,
    pub last_checkpoint_round: u64,
    pub pending_yield: BigUint<M>,
    pub claimed_yield: BigUint<M>,
}

impl<M: ManagedTypeApi> UserAccount<M> {
    pub fn new(now: u64, round: u64) -> Self {
        UserAccount {
            balance: BigUint::zero(),
            last_checkpoint_time: now,
            last_checkpoint_round: round,
            pending_yield: BigUint::zero(),
            claimed_yield: BigUint::zero(),
        }
    }

    pub fn points_until(&self, timestamp: u64) -> BigUint<M> {
        let elapsed = timestamp.saturating_sub(self.last_checkpoint_time);
        &self.balance * &BigUint::from(elapsed)
    }
}

/// Balance an account held at the end of `round_id`, and through every later round
/// up to its next entry.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct BalanceCheckpoint<M: ManagedTypeApi> {
    pub round_id: u64,
    pub balance: BigUint<M>,
}

/// Outstanding leverage flash loan, recorded before the pool is called and cleared by
/// the callback.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct LeverageRequest<M: ManagedTypeApi> {
    pub depositor: ManagedAddress<M>,
    pub asset: TokenIdentifier<M>,
    pub principal_amount: BigUint<M>,
    pub extra_borrow_amount: BigUint<M>,
    pub interest_rate_mode: u64,
}

impl<M: ManagedTypeApi> LeverageRequest<M> {
    pub fn total_supply_amount(&self) -> BigUint<M> {
        &self.principal_amount + &self.extra_borrow_amount
    }

    pub fn payload(&self) -> LeveragePayload<M> {
        LeveragePayload {
            depositor: self.depositor.clone(),
            interest_rate_mode: self.interest_rate_mode,
            total_supply_amount: self.total_supply_amount(),
        }
    }
}

/// Callback payload carried through `flashLoan` params.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct LeveragePayload<M: ManagedTypeApi> {
    pub depositor: ManagedAddress<M>,
    pub interest_rate_mode: u64,
    pub total_supply_amount: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct ReserveData<M: ManagedTypeApi> {
    pub asset: TokenIdentifier<M>,
    pub receipt_supply: BigUint<M>,
    pub debt_supply: BigUint<M>,
    pub available_liquidity: BigUint<M>,
    pub flash_loan_premium_bps: u64,
    pub yield_distributor: Option<ManagedAddress<M>>,
}
