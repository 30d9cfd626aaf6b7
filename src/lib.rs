#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod params;
pub mod settlement;
pub mod storage;
pub mod types;
pub mod views;
pub mod wiki_stake_dao_proxy;

use errors::{
    ERR_DUPLICATE_VOTE, ERR_INSUFFICIENT_DEPOSIT, ERR_INSUFFICIENT_STAKE, ERR_PAGE_NOT_FOUND,
    ERR_PROPOSAL_NOT_FOUND, ERR_VOTING_CLOSED,
};
use types::{Proposal, ProposalKind, VoteSide, VoterStake};

// ============================================================
// Contract
// ============================================================

/// Stake-weighted curation of wiki pages.
///
/// Anyone may propose a new page or an edit by locking a deposit. Voters
/// stake EGLD for or against; once the voting window closes the proposal is
/// finalized by strict majority, and winning voters claim their stake back
/// minus the protocol fee.
#[multiversx_sc::contract]
pub trait WikiStakeDao:
    storage::StorageModule
    + params::ParamsModule
    + events::EventsModule
    + settlement::SettlementModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        admin: ManagedAddress,
        proposal_deposit: BigUint,
        min_voter_stake: BigUint,
        voting_duration: u64,
        fee_bps: u64,
    ) {
        self.admin().set(&admin);
        self.store_params(proposal_deposit, min_voter_stake, voting_duration, fee_bps);
        self.proposal_count().set(0u64);
        self.page_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: proposeCreate
    // The whole payment is locked as the deposit.
    // ========================================================

    #[endpoint(proposeCreate)]
    #[payable("EGLD")]
    fn propose_create(&self, content_ref: ManagedBuffer) -> u64 {
        self.open_proposal(ProposalKind::Create, 0, content_ref)
    }

    // ========================================================
    // ENDPOINT: proposeEdit
    // ========================================================

    #[endpoint(proposeEdit)]
    #[payable("EGLD")]
    fn propose_edit(&self, page_id: u64, content_ref: ManagedBuffer) -> u64 {
        require!(
            !self.pages(page_id).is_empty() && self.pages(page_id).get().exists,
            ERR_PAGE_NOT_FOUND
        );
        self.open_proposal(ProposalKind::Edit, page_id, content_ref)
    }

    // ========================================================
    // ENDPOINT: stakeAndVote
    // One vote per address per proposal; the first vote is final.
    // ========================================================

    #[endpoint(stakeAndVote)]
    #[payable("EGLD")]
    fn stake_and_vote(&self, proposal_id: u64, side: VoteSide) {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_voting_open(now), ERR_VOTING_CLOSED);

        let amount = self.call_value().egld_value().clone_value();
        require!(amount >= proposal.min_voter_stake, ERR_INSUFFICIENT_STAKE);

        let caller = self.blockchain().get_caller();
        let stake_mapper = self.voter_stake(proposal_id, &caller);
        require!(stake_mapper.is_empty(), ERR_DUPLICATE_VOTE);

        match side {
            VoteSide::For => proposal.total_for += &amount,
            VoteSide::Against => proposal.total_against += &amount,
        }

        stake_mapper.set(VoterStake {
            side,
            amount: amount.clone(),
            claimed: false,
        });
        self.proposals(proposal_id).set(&proposal);
        self.active_stakes().update(|s| *s += &amount);

        self.vote_cast_event(proposal_id, &caller, side, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Stores a new proposal with the parameters currently in force.
    fn open_proposal(&self, kind: ProposalKind, page_id: u64, content_ref: ManagedBuffer) -> u64 {
        let deposit = self.call_value().egld_value().clone_value();
        require!(
            deposit >= self.proposal_deposit().get(),
            ERR_INSUFFICIENT_DEPOSIT
        );

        let caller = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1u64;
        let now = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            page_id,
            kind,
            proposer: caller.clone(),
            content_ref: content_ref.clone(),
            deposit_amount: deposit.clone(),
            start_time: now,
            end_time: now.saturating_add(self.voting_duration().get()),
            total_for: BigUint::zero(),
            total_against: BigUint::zero(),
            finalized: false,
            accepted: false,
            min_voter_stake: self.min_voter_stake().get(),
            fee_bps: self.fee_bps().get(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.pending_deposits().update(|d| *d += &deposit);

        self.proposal_created_event(proposal_id, &caller, kind, page_id, &content_ref);

        proposal_id
    }
}
