use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::{Validate, ValidationError, ValidationErrors};
use weekmenu_db::table::Recipe;

#[derive(Validate, Debug, Default, Clone)]
pub struct CreateInput {
    #[validate(length(max = 100))]
    pub recipe_id: Option<String>,
    #[validate(length(min = 1, max = 255, message = "required, at most 255 characters"))]
    pub title: String,
    #[validate(url(message = "must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub recipe_url: String,
    pub ingredients: String,
    pub description: Option<String>,
}

pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> weekmenu_shared::Result<String> {
        let input = CreateInput {
            recipe_id: optional(input.recipe_id),
            title: input.title.trim().to_owned(),
            image_url: optional(input.image_url),
            recipe_url: input.recipe_url.trim().to_owned(),
            ingredients: input.ingredients.trim().to_owned(),
            description: optional(input.description),
        };
        input.validate()?;

        let id = Ulid::new().to_string();
        let recipe_id = input
            .recipe_id
            .unwrap_or_else(|| format!("manual-{id}"));

        if self.find_id_by_recipe_id(&recipe_id).await?.is_some() {
            let mut errors = ValidationErrors::new();
            errors.add(
                "recipe_id",
                ValidationError::new("unique").with_message("already registered".into()),
            );

            return Err(errors.into());
        }

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
                recipe_id.into(),
                input.title.into(),
                input.image_url.into(),
                input.recipe_url.into(),
                input.ingredients.into(),
                input.description.into(),
                weekmenu_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(id)
    }
}
