multiversx_sc::imports!();

use multiversx_sc::codec::{TopDecode, TopEncode};

use common_constants::{FLASH_LOAN_MODE_NO_DEBT, REFERRAL_CODE, VARIABLE_RATE_MODE};
use common_errors::{
    ERROR_FLASH_LOAN_ONGOING, ERROR_INVALID_FLASH_LOAN, ERROR_INVALID_FLASH_LOAN_PAYLOAD,
    ERROR_INVALID_MSG_VALUE, ERROR_INVALID_PAYMENT, ERROR_ZERO_AMOUNT,
};
use common_proxies::pool_proxy;
use common_structs::{LeveragePayload, LeverageRequest};

use crate::{config, native};

/// Single-transaction leveraged supply.
///
/// The flash loan is a two-phase protocol: `process_leverage_deposit` records the
/// outstanding request and calls `flashLoan` on the pool; the pool re-enters through
/// `executeOperation`, which only proceeds against that record and clears it.
#[multiversx_sc::module]
pub trait LeverageModule:
    config::ConfigModule + native::NativeModule + common_events::EventsModule
{
    /// Collects the principal attached to the call and runs the flash loan.
    ///
    /// # Arguments
    /// - `depositor`: Account receiving the collateral and the debt.
    /// - `asset`: EGLD sentinel or the ESDT to lever.
    /// - `principal_amount`: Amount the depositor brings, attached as payment.
    /// - `extra_borrow_amount`: Amount flash borrowed and left as debt.
    fn process_leverage_deposit(
        &self,
        depositor: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        principal_amount: &BigUint,
        extra_borrow_amount: &BigUint,
    ) {
        require!(*extra_borrow_amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(self.pending_leverage().is_empty(), ERROR_FLASH_LOAN_ONGOING);

        let payment = self.call_value().egld_or_single_esdt();
        let loan_asset = self.collect_principal(asset, principal_amount, &payment);

        let request = LeverageRequest {
            depositor: depositor.clone(),
            asset: loan_asset.clone(),
            principal_amount: principal_amount.clone(),
            extra_borrow_amount: extra_borrow_amount.clone(),
            interest_rate_mode: VARIABLE_RATE_MODE,
        };
        let params = self.encode_leverage_payload(&request.payload());
        self.pending_leverage().set(&request);

        let sc_address = self.blockchain().get_sc_address();
        self.tx()
            .to(self.pool_address().get())
            .typed(pool_proxy::LendingPoolProxy)
            .flash_loan(
                &sc_address,
                ManagedVec::from_single_item(loan_asset),
                ManagedVec::from_single_item(extra_borrow_amount.clone()),
                ManagedVec::from_single_item(FLASH_LOAN_MODE_NO_DEBT),
                &sc_address,
                params,
                REFERRAL_CODE,
            )
            .sync_call();

        // The callback consumes the request; anything left means it never ran
        require!(self.pending_leverage().is_empty(), ERROR_INVALID_FLASH_LOAN);
    }

    /// Flash loan callback, reachable only from the pool while a request is outstanding.
    ///
    /// Supplies principal plus the loan on behalf of the depositor, borrows loan plus
    /// premium against the depositor's delegation and hands that amount back to the pool.
    #[payable("*")]
    #[endpoint(executeOperation)]
    fn execute_operation(
        &self,
        assets: ManagedVec<TokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        premiums: ManagedVec<BigUint>,
        initiator: ManagedAddress,
        params: ManagedBuffer,
    ) -> bool {
        let pool = self.pool_address().get();
        let request_mapper = self.pending_leverage();

        require!(
            self.blockchain().get_caller() == pool,
            ERROR_INVALID_FLASH_LOAN
        );
        require!(
            initiator == self.blockchain().get_sc_address(),
            ERROR_INVALID_FLASH_LOAN
        );
        require!(!request_mapper.is_empty(), ERROR_INVALID_FLASH_LOAN);
        require!(
            assets.len() == 1 && amounts.len() == 1 && premiums.len() == 1,
            ERROR_INVALID_FLASH_LOAN
        );

        let request = request_mapper.take();
        require!(
            *assets.get(0) == request.asset && *amounts.get(0) == request.extra_borrow_amount,
            ERROR_INVALID_FLASH_LOAN
        );

        let received = self.call_value().single_esdt().clone();
        require!(
            received.token_identifier == request.asset
                && received.amount == request.extra_borrow_amount,
            ERROR_INVALID_FLASH_LOAN
        );

        let payload = self.decode_leverage_payload(params);
        require!(payload == request.payload(), ERROR_INVALID_FLASH_LOAN);

        let premium = premiums.get(0).clone_value();
        let owed = &request.extra_borrow_amount + &premium;

        self.tx()
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .supply(&payload.depositor)
            .single_esdt(&request.asset, 0, &payload.total_supply_amount)
            .sync_call();

        self.tx()
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .borrow(
                &request.asset,
                &owed,
                payload.interest_rate_mode,
                REFERRAL_CODE,
                &payload.depositor,
            )
            .sync_call();

        self.tx()
            .to(&pool)
            .single_esdt(&request.asset, 0, &owed)
            .transfer();

        self.leverage_deposit_event(
            &payload.depositor,
            &request.asset,
            &request.principal_amount,
            &request.extra_borrow_amount,
            &premium,
        );

        true
    }

    /// Validates the attached principal against the requested asset and returns the
    /// token that is actually flash borrowed. EGLD principal is wrapped on the spot.
    fn collect_principal(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        principal_amount: &BigUint,
        payment: &EgldOrEsdtTokenPayment,
    ) -> TokenIdentifier {
        if asset.is_egld() {
            require!(
                payment.token_identifier.is_egld() && payment.amount == *principal_amount,
                ERROR_INVALID_MSG_VALUE
            );
            if *principal_amount > 0u64 {
                self.wrap_egld(principal_amount);
            }

            return self.resolve_underlying(asset);
        }

        require!(
            !(payment.token_identifier.is_egld() && payment.amount > 0u64),
            ERROR_INVALID_MSG_VALUE
        );

        if *principal_amount > 0u64 {
            require!(
                payment.token_identifier == *asset
                    && payment.token_nonce == 0
                    && payment.amount == *principal_amount,
                ERROR_INVALID_PAYMENT
            );
        } else {
            require!(payment.amount == 0u64, ERROR_INVALID_PAYMENT);
        }

        self.resolve_underlying(asset)
    }

    fn encode_leverage_payload(&self, payload: &LeveragePayload<Self::Api>) -> ManagedBuffer {
        let mut params = ManagedBuffer::new();
        if payload.top_encode(&mut params).is_err() {
            sc_panic!(ERROR_INVALID_FLASH_LOAN_PAYLOAD);
        }

        params
    }

    fn decode_leverage_payload(&self, params: ManagedBuffer) -> LeveragePayload<Self::Api> {
        LeveragePayload::top_decode(params)
            .unwrap_or_else(|_| sc_panic!(ERROR_INVALID_FLASH_LOAN_PAYLOAD))
    }

    #[view(hasPendingLeverage)]
    fn has_pending_leverage(&self) -> bool {
        !self.pending_leverage().is_empty()
    }

    #[storage_mapper("pending_leverage")]
    fn pending_leverage(&self) -> SingleValueMapper<LeverageRequest<Self::Api>>;
}
