multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Vote: a single holder's choice on a proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Vote {
    Yay,
    Nay,
}

// ============================================================
// Proposal: a request to buy one marketplace item
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct Proposal {
    pub id: u64,
    /// Marketplace item the treasury would buy
    pub item_id: u64,
    /// Block timestamp at which voting closes and execution opens
    pub deadline: u64,
    pub yay_votes: u64,
    pub nay_votes: u64,
    pub executed: bool,
}

impl Proposal {
    pub fn new(id: u64, item_id: u64, deadline: u64) -> Self {
        Proposal {
            id,
            item_id,
            deadline,
            yay_votes: 0,
            nay_votes: 0,
            executed: false,
        }
    }

    pub fn is_voting_open(&self, now: u64) -> bool {
        now < self.deadline
    }

    /// Ties fail.
    pub fn passed(&self) -> bool {
        self.yay_votes > self.nay_votes
    }

    pub fn total_votes(&self) -> u64 {
        self.yay_votes + self.nay_votes
    }

    pub fn tally(&mut self, vote: Vote) {
        match vote {
            Vote::Yay => self.yay_votes += 1,
            Vote::Nay => self.nay_votes += 1,
        }
    }
}
