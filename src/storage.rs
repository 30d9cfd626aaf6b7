multiversx_sc::imports!();

use crate::types::{Page, Proposal, VoterStake};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Proposals ──

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voterStake")]
    fn voter_stake(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoterStake<Self::Api>>;

    // ── Pages ──

    #[view(pageCount)]
    #[storage_mapper("pageCount")]
    fn page_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pages")]
    fn pages(&self, id: u64) -> SingleValueMapper<Page<Self::Api>>;

    // ── Balance accounting ──
    // contract balance == pending deposits + active stakes + claimable stakes
    //                     + forfeited + fees collected

    /// Deposits of proposals not yet finalized.
    #[storage_mapper("pendingDeposits")]
    fn pending_deposits(&self) -> SingleValueMapper<BigUint>;

    /// Stakes on proposals not yet finalized.
    #[storage_mapper("activeStakes")]
    fn active_stakes(&self) -> SingleValueMapper<BigUint>;

    /// Winning stakes not yet claimed, gross of fee.
    #[storage_mapper("claimableStakes")]
    fn claimable_stakes(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("forfeited")]
    fn forfeited(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("feesCollected")]
    fn fees_collected(&self) -> SingleValueMapper<BigUint>;
}
