use sea_query::{Expr, ExprTrait, JoinType, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use weekmenu_db::table::{Recipe, ShoppingItem};

#[derive(Debug, Default, Clone, FromRow)]
pub struct ShoppingItemRow {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub is_purchased: bool,
    pub recipe_id: Option<String>,
    #[sqlx(rename = "title")]
    pub recipe_title: Option<String>,
    pub added_at: i64,
}

impl ShoppingItemRow {
    pub fn added_at(&self) -> String {
        weekmenu_shared::format_timestamp(self.added_at)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ShoppingList {
    pub unpurchased: Vec<ShoppingItemRow>,
    pub purchased: Vec<ShoppingItemRow>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.unpurchased.is_empty() && self.purchased.is_empty()
    }
}

impl super::Query {
    /// All items, newest first, split by purchased state.
    pub async fn list(&self) -> anyhow::Result<ShoppingList> {
        let statement = sea_query::Query::select()
            .columns([
                (ShoppingItem::Table, ShoppingItem::Id),
                (ShoppingItem::Table, ShoppingItem::Name),
                (ShoppingItem::Table, ShoppingItem::Quantity),
                (ShoppingItem::Table, ShoppingItem::IsPurchased),
                (ShoppingItem::Table, ShoppingItem::RecipeId),
                (ShoppingItem::Table, ShoppingItem::AddedAt),
            ])
            .column((Recipe::Table, Recipe::Title))
            .from(ShoppingItem::Table)
            .join(
                JoinType::LeftJoin,
                Recipe::Table,
                Expr::col((ShoppingItem::Table, ShoppingItem::RecipeId))
                    .equals((Recipe::Table, Recipe::Id)),
            )
            .order_by((ShoppingItem::Table, ShoppingItem::AddedAt), Order::Desc)
            .order_by_expr(Expr::cust("shopping_item.rowid"), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let (purchased, unpurchased) = rows.into_iter().partition(|row| row.is_purchased);

        Ok(ShoppingList {
            unpurchased,
            purchased,
        })
    }
}
