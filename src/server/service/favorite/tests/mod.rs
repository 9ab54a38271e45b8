use citadel_test_utils::prelude::*;

use crate::{
    model::catalog::CatalogKind,
    server::{
        error::{favorite::FavoriteError, Error},
        service::favorite::FavoriteService,
    },
};
