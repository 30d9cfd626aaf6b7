multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_CLAIMED, ERR_NOTHING_TO_CLAIM, ERR_NOT_FINALIZED, ERR_PROPOSAL_NOT_FOUND,
    ERR_VOTING_STILL_OPEN,
};
use crate::types::{Page, Proposal, ProposalKind, VoteSide};

/// Finalization tally and per-voter claim settlement.
///
/// Value that is not refunded or claimable after an outcome is forfeited:
/// it stays on the contract balance and is only tracked by the `forfeited`
/// counter.
#[multiversx_sc::module]
pub trait SettlementModule:
    crate::storage::StorageModule + crate::params::ParamsModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: finalizeProposal
    // Anyone may call once the window has elapsed. Repeat calls
    // return the stored outcome without side effects.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) -> bool {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(proposal_id).get();
        if proposal.finalized {
            return proposal.accepted;
        }

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.end_time, ERR_VOTING_STILL_OPEN);

        // Strict majority; For does not win ties
        let accepted = proposal.total_for > proposal.total_against;
        proposal.finalized = true;
        proposal.accepted = accepted;

        self.pending_deposits()
            .update(|d| *d -= &proposal.deposit_amount);
        self.active_stakes()
            .update(|s| *s -= &proposal.total_staked());

        if accepted {
            self.commit_page(&mut proposal);
            self.claimable_stakes()
                .update(|c| *c += &proposal.total_for);
            self.forfeited()
                .update(|f| *f += &proposal.total_against);
        } else {
            let mut lost = proposal.deposit_amount.clone();
            match proposal.winning_side() {
                Some(VoteSide::Against) => {
                    self.claimable_stakes()
                        .update(|c| *c += &proposal.total_against);
                    lost += &proposal.total_for;
                }
                // tie: neither side is refundable
                _ => lost += proposal.total_staked(),
            }
            self.forfeited().update(|f| *f += &lost);
        }

        self.proposals(proposal_id).set(&proposal);
        self.proposal_finalized_event(proposal_id, accepted, proposal.page_id);

        if accepted {
            self.send_egld_if_any(&proposal.proposer, &proposal.deposit_amount);
        }

        accepted
    }

    /// Writes the accepted content into the page registry. A Create proposal
    /// mints the next page id and records it on the proposal.
    fn commit_page(&self, proposal: &mut Proposal<Self::Api>) {
        match proposal.kind {
            ProposalKind::Create => {
                let page_id = self.page_count().get() + 1;
                self.page_count().set(page_id);
                self.pages(page_id).set(Page {
                    content_ref: proposal.content_ref.clone(),
                    exists: true,
                    last_proposal_id: proposal.id,
                    revision: 1,
                });
                proposal.page_id = page_id;
            }
            ProposalKind::Edit => {
                self.pages(proposal.page_id).update(|page| {
                    page.content_ref = proposal.content_ref.clone();
                    page.last_proposal_id = proposal.id;
                    page.revision += 1;
                });
            }
        }

        self.page_committed_event(proposal.page_id, proposal.id, &proposal.content_ref);
    }

    // ========================================================
    // ENDPOINT: claim
    // Winning voters withdraw their stake once, minus the fee.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self, proposal_id: u64) -> BigUint {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let proposal = self.proposals(proposal_id).get();
        require!(proposal.finalized, ERR_NOT_FINALIZED);

        let caller = self.blockchain().get_caller();
        let stake_mapper = self.voter_stake(proposal_id, &caller);
        require!(!stake_mapper.is_empty(), ERR_NOTHING_TO_CLAIM);

        let mut stake = stake_mapper.get();
        require!(
            proposal.winning_side() == Some(stake.side),
            ERR_NOTHING_TO_CLAIM
        );
        require!(!stake.claimed, ERR_ALREADY_CLAIMED);

        let fee = proposal.claim_fee(&stake.amount);
        let payout = &stake.amount - &fee;

        stake.claimed = true;
        stake_mapper.set(&stake);
        self.claimable_stakes().update(|c| *c -= &stake.amount);
        self.fees_collected().update(|f| *f += &fee);

        self.claimed_event(proposal_id, &caller, &payout, &fee);
        self.send_egld_if_any(&caller, &payout);

        payout
    }

    fn send_egld_if_any(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount > 0u64 {
            self.send().direct_egld(to, amount);
        }
    }
}
