//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// mock fixtures. Methods can be chained together and finalized with `build()` to
/// create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // Database fixtures to insert
    users: Vec<i32>,
    characters: Vec<i32>,
    locations: Vec<i32>,
    episodes: Vec<i32>,
    favorite_characters: Vec<(i32, i32)>, // (user_id, character_id)
    favorite_locations: Vec<(i32, i32)>,  // (user_id, location_id)
    favorite_episodes: Vec<(i32, i32)>,   // (user_id, episode_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            locations: Vec::new(),
            episodes: Vec::new(),
            favorite_characters: Vec::new(),
            favorite_locations: Vec::new(),
            favorite_episodes: Vec::new(),
        }
    }

    /// Add every table of the schema to the test database.
    ///
    /// Creates User, Character, Location, Episode and the three favorite join tables,
    /// in foreign key order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use citadel_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), citadel_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Character)
    ///     .with_table(Location)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock user into database.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user, also used to derive a unique username and email
    pub fn with_mock_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Insert mock character into database.
    pub fn with_mock_character(mut self, character_id: i32) -> Self {
        self.characters.push(character_id);
        self
    }

    /// Insert mock location into database.
    pub fn with_mock_location(mut self, location_id: i32) -> Self {
        self.locations.push(location_id);
        self
    }

    /// Insert mock episode into database.
    pub fn with_mock_episode(mut self, episode_id: i32) -> Self {
        self.episodes.push(episode_id);
        self
    }

    /// Mark a character as a favorite of a user.
    ///
    /// Both the user and the character must be added with `with_mock_user` and
    /// `with_mock_character` before the favorite can be inserted.
    pub fn with_favorite_character(mut self, user_id: i32, character_id: i32) -> Self {
        self.favorite_characters.push((user_id, character_id));
        self
    }

    /// Mark a location as a favorite of a user.
    pub fn with_favorite_location(mut self, user_id: i32, location_id: i32) -> Self {
        self.favorite_locations.push((user_id, location_id));
        self
    }

    /// Mark an episode as a favorite of a user.
    pub fn with_favorite_episode(mut self, user_id: i32, episode_id: i32) -> Self {
        self.favorite_episodes.push((user_id, episode_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables if specified, then custom tables)
    /// 2. Inserts users and catalog records
    /// 3. Inserts favorite join records
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Location),
                schema.create_table_from_entity(entity::prelude::Episode),
                schema.create_table_from_entity(entity::prelude::UserFavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::UserFavoriteLocation),
                schema.create_table_from_entity(entity::prelude::UserFavoriteEpisode),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert users and catalog records
        for user_id in self.users {
            setup.user().insert_mock_user(user_id).await?;
        }

        for character_id in self.characters {
            setup.catalog().insert_mock_character(character_id).await?;
        }

        for location_id in self.locations {
            setup.catalog().insert_mock_location(location_id).await?;
        }

        for episode_id in self.episodes {
            setup.catalog().insert_mock_episode(episode_id).await?;
        }

        // 3. Insert favorites, these depend on the records above
        for (user_id, character_id) in self.favorite_characters {
            setup
                .favorite()
                .insert_favorite_character(user_id, character_id)
                .await?;
        }

        for (user_id, location_id) in self.favorite_locations {
            setup
                .favorite()
                .insert_favorite_location(user_id, location_id)
                .await?;
        }

        for (user_id, episode_id) in self.favorite_episodes {
            setup
                .favorite()
                .insert_favorite_episode(user_id, episode_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
