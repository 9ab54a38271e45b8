use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The kinds of catalog records a user can mark as a favorite.
///
/// Deserializes from both the singular (`character`) and plural (`characters`) path
/// segment so the same type serves every favorites route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[serde(alias = "characters")]
    Character,
    #[serde(alias = "locations")]
    Location,
    #[serde(alias = "episodes")]
    Episode,
}

impl CatalogKind {
    /// Capitalized name used in response messages, e.g. `Character added to favorites`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Location => "Location",
            Self::Episode => "Episode",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Location => write!(f, "location"),
            Self::Episode => write!(f, "episode"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub character_name: String,
    pub gender: String,
    pub alive: bool,
    pub species: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub location_name: String,
    pub location_type: String,
    pub dimension: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EpisodeDto {
    pub id: i32,
    pub episode_name: String,
    pub air_date: String,
    pub episode: String,
}
