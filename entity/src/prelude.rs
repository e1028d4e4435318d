pub use super::character::Entity as Character;
pub use super::user::Entity as User;
pub use super::user_character::Entity as UserCharacter;
