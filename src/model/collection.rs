#[derive(Debug, PartialEq, Eq)]
pub enum SacrificeOutcome {
    /// The user has never claimed a character
    NoUser,
    /// The user owns no character with the requested name
    NotOwned,
    Sacrificed {
        character: entity::character::Model,
        /// Cash balance after the credit
        balance: i64,
    },
}
