// Read positions over the route sequences
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    // Current asset index in the path
    pub asset: u32,
    pub amount: u32,
    pub participant: u32,
    pub aux: u32,
}

impl Cursor {
    pub fn advance(self, assets: u32, amounts: u32, participants: u32, aux: u32) -> Self {
        Cursor {
            asset: self.asset + assets,
            amount: self.amount + amounts,
            participant: self.participant + participants,
            aux: self.aux + aux,
        }
    }
}
