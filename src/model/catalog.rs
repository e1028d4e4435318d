/// Inclusive power range of catalog characters.
pub const MIN_POWER: i32 = 0;
pub const MAX_POWER: i32 = 999;

#[derive(Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The catalog was empty and has been filled
    Generated { inserted: u64 },
    /// The catalog already had characters, nothing was written
    AlreadyPopulated { existing: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddCharacterOutcome {
    Added(entity::character::Model),
    /// A character with this name exists, it is returned unchanged
    AlreadyExists(entity::character::Model),
    InvalidPower(i64),
}
