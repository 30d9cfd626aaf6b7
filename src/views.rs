multiversx_sc::imports!();

use crate::errors::ERR_PROPOSAL_NOT_FOUND;
use crate::types::{Page, Proposal, VoterStake};

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule {
    #[view(proposalSummary)]
    fn proposal_summary(&self, id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(id).is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            result.push(self.proposals(i).get());
        }
        result
    }

    /// Unknown ids read as an empty reference that does not exist.
    #[view(getPage)]
    fn get_page(&self, id: u64) -> MultiValue2<ManagedBuffer, bool> {
        if self.pages(id).is_empty() {
            return (ManagedBuffer::new(), false).into();
        }
        let page = self.pages(id).get();
        (page.content_ref, page.exists).into()
    }

    #[view(getPageRecord)]
    fn get_page_record(&self, id: u64) -> OptionalValue<Page<Self::Api>> {
        if self.pages(id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.pages(id).get())
    }

    #[view(getVoterStake)]
    fn get_voter_stake(
        &self,
        proposal_id: u64,
        voter: ManagedAddress,
    ) -> OptionalValue<VoterStake<Self::Api>> {
        let mapper = self.voter_stake(proposal_id, &voter);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: ManagedAddress) -> bool {
        !self.voter_stake(proposal_id, &voter).is_empty()
    }

    /// Net payout `claim` would send to `voter` right now; 0 if it would fail.
    #[view(getClaimable)]
    fn get_claimable(&self, proposal_id: u64, voter: ManagedAddress) -> BigUint {
        let stake_mapper = self.voter_stake(proposal_id, &voter);
        if self.proposals(proposal_id).is_empty() || stake_mapper.is_empty() {
            return BigUint::zero();
        }

        let proposal = self.proposals(proposal_id).get();
        let stake = stake_mapper.get();
        if stake.claimed || proposal.winning_side() != Some(stake.side) {
            return BigUint::zero();
        }

        let fee = proposal.claim_fee(&stake.amount);
        stake.amount - fee
    }

    /// (pending deposits, active stakes, claimable stakes, forfeited, fees collected).
    /// The five always sum to the contract balance.
    #[view(getAccounting)]
    fn get_accounting(&self) -> MultiValue5<BigUint, BigUint, BigUint, BigUint, BigUint> {
        (
            self.pending_deposits().get(),
            self.active_stakes().get(),
            self.claimable_stakes().get(),
            self.forfeited().get(),
            self.fees_collected().get(),
        )
            .into()
    }
}
