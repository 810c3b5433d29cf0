use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use recipes_core::{Recipe, RecipeSearch};

use crate::schema::recipes;
use crate::store::{RecipeStore, StoreError};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create database pool");

    // Run pending migrations on startup
    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");

    pool
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
struct RecipeRow {
    id: i64,
    name: Option<String>,
    description: Option<String>,
    duration: Option<i64>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            duration_in_minutes: row.duration,
        }
    }
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(treat_none_as_null = true)]
struct RecipeChanges<'a> {
    name: Option<&'a str>,
    description: Option<&'a str>,
    duration: Option<i64>,
}

impl<'a> From<&'a Recipe> for RecipeChanges<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        RecipeChanges {
            name: recipe.name.as_deref(),
            description: recipe.description.as_deref(),
            duration: recipe.duration_in_minutes,
        }
    }
}

/// Postgres-backed [`RecipeStore`] over a r2d2 connection pool.
pub struct PgRecipeStore {
    pool: DbPool,
}

impl PgRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        PgRecipeStore { pool }
    }

    /// Builds the pool from a connection string and runs pending migrations.
    pub fn open(database_url: &str) -> Self {
        PgRecipeStore::new(create_pool(database_url))
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, StoreError> {
        Ok(self.pool.get()?)
    }
}

impl RecipeStore for PgRecipeStore {
    fn create(&self, recipe: &Recipe) -> Result<Recipe, StoreError> {
        let mut conn = self.conn()?;

        let row: RecipeRow = diesel::insert_into(recipes::table)
            .values(RecipeChanges::from(recipe))
            .returning(RecipeRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        let mut conn = self.conn()?;

        let row: Option<RecipeRow> = recipes::table
            .find(id)
            .select(RecipeRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Recipe::from))
    }

    fn update(&self, id: i64, recipe: &Recipe) -> Result<(), StoreError> {
        let mut conn = self.conn()?;

        diesel::update(recipes::table.find(id))
            .set(RecipeChanges::from(recipe))
            .execute(&mut conn)?;

        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(recipes::table.find(id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut conn = self.conn()?;

        let rows: Vec<RecipeRow> = recipes::table
            .order(recipes::id.asc())
            .select(RecipeRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    fn find(&self, search: &RecipeSearch) -> Result<Vec<Recipe>, StoreError> {
        let (Some(from), Some(to)) = (search.duration_from, search.duration_to) else {
            return self.list_all();
        };

        let mut conn = self.conn()?;

        let rows: Vec<RecipeRow> = recipes::table
            .filter(recipes::duration.ge(from))
            .filter(recipes::duration.le(to))
            .order(recipes::id.asc())
            .select(RecipeRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }
}
