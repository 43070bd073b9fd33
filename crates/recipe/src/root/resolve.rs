use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::Validate;
use weekmenu_db::table::Recipe;

use crate::RecipeDescriptor;

impl super::Command {
    /// Local id of the cached recipe for `descriptor.recipe_id`, caching it
    /// first when unknown. An existing row is returned as is.
    pub async fn resolve_or_create(
        &self,
        descriptor: &RecipeDescriptor,
    ) -> weekmenu_shared::Result<String> {
        descriptor.validate()?;

        if let Some(id) = self.find_id_by_recipe_id(&descriptor.recipe_id).await? {
            return Ok(id);
        }

        let id = Ulid::new().to_string();

        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::RecipeId,
                Recipe::Title,
                Recipe::ImageUrl,
                Recipe::RecipeUrl,
                Recipe::Ingredients,
                Recipe::Description,
                Recipe::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                descriptor.recipe_id.to_owned().into(),
                descriptor.title.to_owned().into(),
                descriptor.image_url.to_owned().into(),
                descriptor.recipe_url.to_owned().into(),
                descriptor.ingredients.to_owned().into(),
                descriptor.description.to_owned().into(),
                weekmenu_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.write_db).await {
            Ok(_) => Ok(id),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                match self.find_id_by_recipe_id(&descriptor.recipe_id).await? {
                    Some(id) => Ok(id),
                    _ => weekmenu_shared::bail!(
                        "recipe {} vanished after unique violation",
                        descriptor.recipe_id
                    ),
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}
