use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;
use weekmenu_db::table::Recipe;

use super::create::optional;

#[derive(Validate, Debug, Default, Clone)]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 255, message = "required, at most 255 characters"))]
    pub title: String,
    #[validate(url(message = "must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub recipe_url: String,
    pub ingredients: String,
    pub description: Option<String>,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateInput,
    ) -> weekmenu_shared::Result<()> {
        let id = id.into();
        let input = UpdateInput {
            title: input.title.trim().to_owned(),
            image_url: optional(input.image_url),
            recipe_url: input.recipe_url.trim().to_owned(),
            ingredients: input.ingredients.trim().to_owned(),
            description: optional(input.description),
        };
        input.validate()?;

        let statement = Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Title, input.title.into()),
                (Recipe::ImageUrl, input.image_url.into()),
                (Recipe::RecipeUrl, input.recipe_url.into()),
                (Recipe::Ingredients, input.ingredients.into()),
                (Recipe::Description, input.description.into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        if result.rows_affected() == 0 {
            weekmenu_shared::not_found!("recipe {id}");
        }

        Ok(())
    }
}
