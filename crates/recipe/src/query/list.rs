use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use weekmenu_db::table::Recipe;

#[derive(Debug, Default, Clone, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub recipe_id: String,
    pub title: String,
    pub image_url: Option<String>,
    pub recipe_url: String,
    pub ingredients: String,
    pub description: Option<String>,
    pub created_at: i64,
}

impl RecipeRow {
    pub fn ingredient_list(&self) -> Vec<&str> {
        crate::gap::tokenize(&self.ingredients)
    }

    pub fn created_at(&self) -> String {
        weekmenu_shared::format_timestamp(self.created_at)
    }
}

fn select() -> sea_query::SelectStatement {
    sea_query::Query::select()
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
        .from(Recipe::Table)
        .to_owned()
}

impl super::Query {
    pub async fn all(&self) -> anyhow::Result<Vec<RecipeRow>> {
        let statement = select()
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<RecipeRow>> {
        let statement = select()
            .and_where(Expr::col(Recipe::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn find_by_recipe_id(
        &self,
        recipe_id: impl Into<String>,
    ) -> anyhow::Result<Option<RecipeRow>> {
        let statement = select()
            .and_where(Expr::col(Recipe::RecipeId).eq(recipe_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Recipes with the given local ids, in no particular order.
    pub async fn find_many(&self, ids: &[String]) -> anyhow::Result<Vec<RecipeRow>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = select()
            .and_where(Expr::col(Recipe::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
