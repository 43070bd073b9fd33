use std::collections::HashMap;

use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use weekmenu_db::table::Ingredient;

use crate::StorageMethod;

#[derive(Debug, Default, Clone, FromRow)]
pub struct IngredientRow {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub purchase_date: i64,
    pub expiration_date: i64,
    pub memo: Option<String>,
    pub storage_method: sqlx::types::Text<StorageMethod>,
    pub created_at: i64,
}

impl IngredientRow {
    pub fn purchase_date(&self) -> String {
        weekmenu_shared::format_timestamp(self.purchase_date)
    }

    pub fn expiration_date(&self) -> String {
        weekmenu_shared::format_timestamp(self.expiration_date)
    }

    pub fn is_expired(&self, today: i64) -> bool {
        self.expiration_date < today
    }
}

fn select() -> sea_query::SelectStatement {
    sea_query::Query::select()
        .columns([
            Ingredient::Id,
            Ingredient::Name,
            Ingredient::Quantity,
            Ingredient::PurchaseDate,
            Ingredient::ExpirationDate,
            Ingredient::Memo,
            Ingredient::StorageMethod,
            Ingredient::CreatedAt,
        ])
        .from(Ingredient::Table)
        .to_owned()
}

impl super::Query {
    pub async fn all(&self) -> anyhow::Result<Vec<IngredientRow>> {
        let statement = select()
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<IngredientRow>> {
        let statement = select()
            .and_where(Expr::col(Ingredient::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Every pantry name, used by gap analysis.
    pub async fn names(&self) -> anyhow::Result<Vec<String>> {
        let statement = sea_query::Query::select()
            .column(Ingredient::Name)
            .from(Ingredient::Table)
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Names of the given ingredient ids in the given order. Ids that no longer
    /// exist are skipped.
    pub async fn find_names(&self, ids: &[String]) -> anyhow::Result<Vec<String>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = sea_query::Query::select()
            .columns([Ingredient::Id, Ingredient::Name])
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String, String), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let names = rows.into_iter().collect::<HashMap<_, _>>();

        Ok(ids.iter().filter_map(|id| names.get(id).cloned()).collect())
    }
}
