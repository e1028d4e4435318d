mod create;
mod get_all_ids;

use super::*;

use crate::data::character::CharacterRepository;
