multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::params::FEE_DENOMINATOR;

// ============================================================
// Proposal Kind — what an accepted proposal does to the pages
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalKind {
    /// Mints a new page on acceptance.
    Create,
    /// Overwrites the content of an existing page on acceptance.
    Edit,
}

// ============================================================
// Vote Side
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteSide {
    For,
    Against,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    /// 0 for a Create proposal until it is accepted, then the minted page id.
    pub page_id: u64,
    pub kind: ProposalKind,
    pub proposer: ManagedAddress<M>,
    pub content_ref: ManagedBuffer<M>,
    /// Entire value sent with the opening call, excess included.
    pub deposit_amount: BigUint<M>,
    pub start_time: u64,
    pub end_time: u64,
    pub total_for: BigUint<M>,
    pub total_against: BigUint<M>,
    pub finalized: bool,
    pub accepted: bool,
    /// Minimum stake in force when the proposal was opened.
    pub min_voter_stake: BigUint<M>,
    /// Claim fee in force when the proposal was opened.
    pub fee_bps: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_voting_open(&self, now: u64) -> bool {
        !self.finalized && now < self.end_time
    }

    /// Side whose stakes are claimable. `None` before finalization and on a tie.
    pub fn winning_side(&self) -> Option<VoteSide> {
        if !self.finalized {
            return None;
        }
        if self.accepted {
            Some(VoteSide::For)
        } else if self.total_against > self.total_for {
            Some(VoteSide::Against)
        } else {
            None
        }
    }

    pub fn total_staked(&self) -> BigUint<M> {
        &self.total_for + &self.total_against
    }

    /// Protocol fee withheld from a winning stake of `amount`.
    pub fn claim_fee(&self, amount: &BigUint<M>) -> BigUint<M> {
        amount * self.fee_bps / FEE_DENOMINATOR
    }
}

// ============================================================
// Voter Stake — one per (proposal, voter), only `claimed` ever flips
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoterStake<M: ManagedTypeApi> {
    pub side: VoteSide,
    pub amount: BigUint<M>,
    pub claimed: bool,
}

// ============================================================
// Page — canonical content pointer
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Page<M: ManagedTypeApi> {
    pub content_ref: ManagedBuffer<M>,
    pub exists: bool,
    /// Accepted proposal that last wrote this page.
    pub last_proposal_id: u64,
    /// 1 on creation, incremented by every accepted edit.
    pub revision: u64,
}
