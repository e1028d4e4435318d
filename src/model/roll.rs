/// Number of catalog characters offered by a roll.
pub const ROLL_SIZE: usize = 3;

/// Parses a reply to a roll prompt into a zero-based option index.
///
/// Accepts a plain number between 1 and `option_count`, surrounding whitespace
/// is ignored.
pub fn parse_choice(content: &str, option_count: usize) -> Option<usize> {
    let content = content.trim();
    if content.is_empty() || !content.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let choice: usize = content.parse().ok()?;
    if (1..=option_count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Claim {
    pub user: entity::user::Model,
    pub ownership: entity::user_character::Model,
    pub character: entity::character::Model,
}
