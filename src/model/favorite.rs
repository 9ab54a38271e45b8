use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::{CatalogKind, CharacterDto, EpisodeDto, LocationDto};

/// A user's favorites grouped by catalog kind.
///
/// Kinds that were not requested are left out of the JSON entirely, so listing a single
/// kind returns only e.g. `charactersFav`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    #[serde(
        rename = "charactersFav",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub characters: Option<Vec<CharacterDto>>,
    #[serde(
        rename = "locationsFav",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub locations: Option<Vec<LocationDto>>,
    #[serde(
        rename = "episodesFav",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub episodes: Option<Vec<EpisodeDto>>,
}

/// Optional request body when adding a favorite.
///
/// Clients send the ID of the record under the key matching its kind, e.g.
/// `{"character_id": 5}` for `POST /user/1/favorites/characters/5`.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct AddFavoriteDto {
    pub character_id: Option<i32>,
    pub location_id: Option<i32>,
    pub episode_id: Option<i32>,
}

impl AddFavoriteDto {
    /// Returns the ID provided for the given kind, if any
    pub fn id_for(&self, kind: CatalogKind) -> Option<i32> {
        match kind {
            CatalogKind::Character => self.character_id,
            CatalogKind::Location => self.location_id,
            CatalogKind::Episode => self.episode_id,
        }
    }
}
