#[derive(Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// At least one of the players has never claimed a character
    MissingPlayer,
    /// At least one of the players currently owns no characters
    MissingCharacters,
    Fought(BattleResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Challenger,
    Opponent,
    Tie,
}

/// The two characters drawn for a battle.
#[derive(Debug, PartialEq, Eq)]
pub struct BattleResult {
    pub challenger: entity::character::Model,
    pub opponent: entity::character::Model,
}

impl BattleResult {
    /// Strictly higher power wins, equal power is a tie
    pub fn winner(&self) -> Winner {
        match self.challenger.power.cmp(&self.opponent.power) {
            std::cmp::Ordering::Greater => Winner::Challenger,
            std::cmp::Ordering::Less => Winner::Opponent,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}
