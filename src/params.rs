multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_DURATION, ERR_INVALID_FEE, ERR_UNAUTHORIZED};

/// Basis points denominator for the protocol fee
pub const FEE_DENOMINATOR: u64 = 10_000;

/// Economic parameters and the admin capability that may change them.
/// Proposals copy the values in force when they are opened.
#[multiversx_sc::module]
pub trait ParamsModule: crate::events::EventsModule {
    #[endpoint(setParams)]
    fn set_params(
        &self,
        proposal_deposit: BigUint,
        min_voter_stake: BigUint,
        voting_duration: u64,
        fee_bps: u64,
    ) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_UNAUTHORIZED);

        self.store_params(proposal_deposit, min_voter_stake, voting_duration, fee_bps);
    }

    fn store_params(
        &self,
        proposal_deposit: BigUint,
        min_voter_stake: BigUint,
        voting_duration: u64,
        fee_bps: u64,
    ) {
        require!(fee_bps <= FEE_DENOMINATOR, ERR_INVALID_FEE);
        require!(voting_duration > 0, ERR_INVALID_DURATION);

        self.proposal_deposit().set(&proposal_deposit);
        self.min_voter_stake().set(&min_voter_stake);
        self.voting_duration().set(voting_duration);
        self.fee_bps().set(fee_bps);

        self.params_updated_event(
            &proposal_deposit,
            &min_voter_stake,
            voting_duration,
            fee_bps,
        );
    }

    #[view(getParams)]
    fn get_params(&self) -> MultiValue4<BigUint, BigUint, u64, u64> {
        (
            self.proposal_deposit().get(),
            self.min_voter_stake().get(),
            self.voting_duration().get(),
            self.fee_bps().get(),
        )
            .into()
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getProposalDeposit)]
    #[storage_mapper("proposalDeposit")]
    fn proposal_deposit(&self) -> SingleValueMapper<BigUint>;

    #[view(getMinVoterStake)]
    #[storage_mapper("minVoterStake")]
    fn min_voter_stake(&self) -> SingleValueMapper<BigUint>;

    /// Seconds
    #[view(getVotingDuration)]
    #[storage_mapper("votingDuration")]
    fn voting_duration(&self) -> SingleValueMapper<u64>;

    #[view(getFeeBps)]
    #[storage_mapper("feeBps")]
    fn fee_bps(&self) -> SingleValueMapper<u64>;
}
