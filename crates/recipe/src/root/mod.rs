use std::ops::Deref;

mod create;
mod resolve;
mod update;

pub use create::*;
pub use update::*;

#[derive(Clone)]
pub struct Command(weekmenu_shared::State);

impl Deref for Command {
    type Target = weekmenu_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: weekmenu_shared::State) -> Self {
        Self(state)
    }

    pub(crate) async fn find_id_by_recipe_id(
        &self,
        recipe_id: &str,
    ) -> weekmenu_shared::Result<Option<String>> {
        use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
        use sea_query_sqlx::SqlxBinder;
        use weekmenu_db::table::Recipe;

        let statement = sea_query::Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::RecipeId).eq(recipe_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        Ok(row.map(|(id,)| id))
    }
}
