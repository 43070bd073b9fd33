use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use weekmenu_db::table::ShoppingItem;

impl super::Command {
    pub async fn delete(&self, id: impl Into<String>) -> weekmenu_shared::Result<bool> {
        let statement = Query::delete()
            .from_table(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::Id).eq(id.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(result.rows_affected() > 0)
    }
}
