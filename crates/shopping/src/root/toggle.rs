use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use weekmenu_db::table::ShoppingItem;

impl super::Command {
    /// Flips the purchased flag and returns its new value, `None` when the
    /// item does not exist.
    pub async fn toggle(&self, id: impl Into<String>) -> weekmenu_shared::Result<Option<bool>> {
        let id = id.into();
        let statement = Query::select()
            .column(ShoppingItem::IsPurchased)
            .from(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some((is_purchased,)) = sqlx::query_as_with::<_, (bool,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?
        else {
            return Ok(None);
        };

        let statement = Query::update()
            .table(ShoppingItem::Table)
            .value(ShoppingItem::IsPurchased, !is_purchased)
            .and_where(Expr::col(ShoppingItem::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(Some(!is_purchased))
    }
}
