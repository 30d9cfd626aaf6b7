multiversx_sc::imports!();

use crate::types::{ProposalKind, VoteSide};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] kind: ProposalKind,
        #[indexed] page_id: u64,
        content_ref: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] side: VoteSide,
        amount: &BigUint,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] accepted: bool,
        #[indexed] page_id: u64,
    );

    #[event("pageCommitted")]
    fn page_committed_event(
        &self,
        #[indexed] page_id: u64,
        #[indexed] proposal_id: u64,
        content_ref: &ManagedBuffer,
    );

    #[event("claimed")]
    fn claimed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] payout: &BigUint,
        fee: &BigUint,
    );

    #[event("paramsUpdated")]
    fn params_updated_event(
        &self,
        #[indexed] proposal_deposit: &BigUint,
        #[indexed] min_voter_stake: &BigUint,
        #[indexed] voting_duration: u64,
        fee_bps: u64,
    );
}
