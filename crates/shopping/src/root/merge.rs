use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use weekmenu_db::table::ShoppingItem;

pub const DEFAULT_QUANTITY: &str = "適量";

/// Splits `"name quantity"` at the first whitespace.
///
/// Returns `None` for a blank item. Without a quantity part the quantity is
/// [`DEFAULT_QUANTITY`].
pub fn parse_item(item: &str) -> Option<(String, String)> {
    let item = item.trim();
    if item.is_empty() {
        return None;
    }

    let (name, quantity) = match item.split_once(char::is_whitespace) {
        Some((name, quantity)) if !quantity.trim().is_empty() => (name, quantity.trim()),
        Some((name, _)) => (name, DEFAULT_QUANTITY),
        _ => (item, DEFAULT_QUANTITY),
    };

    Some((name.to_owned(), quantity.to_owned()))
}

impl super::Command {
    /// Adds `items` to the shopping list on behalf of `recipe_id`.
    ///
    /// An unpurchased item with the same name gets its quantity replaced,
    /// anything else is inserted. Items are applied one by one; a failing
    /// item is logged and skipped. Returns how many items were applied.
    pub async fn merge<S: AsRef<str>>(&self, items: &[S], recipe_id: Option<&str>) -> usize {
        let mut applied = 0;

        for item in items {
            let Some((name, quantity)) = parse_item(item.as_ref()) else {
                continue;
            };

            match self.merge_item(&name, &quantity, recipe_id).await {
                Ok(()) => applied += 1,
                Err(err) => {
                    tracing::error!(name = %name, err = %err, "failed to add shopping item");
                }
            }
        }

        applied
    }

    async fn merge_item(
        &self,
        name: &str,
        quantity: &str,
        recipe_id: Option<&str>,
    ) -> weekmenu_shared::Result<()> {
        let statement = Query::select()
            .column(ShoppingItem::Id)
            .from(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::Name).eq(name))
            .and_where(Expr::col(ShoppingItem::IsPurchased).eq(false))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let existing = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        let (sql, values) = match existing {
            Some((id,)) => Query::update()
                .table(ShoppingItem::Table)
                .value(ShoppingItem::Quantity, quantity)
                .and_where(Expr::col(ShoppingItem::Id).eq(id))
                .build_sqlx(SqliteQueryBuilder),
            _ => Query::insert()
                .into_table(ShoppingItem::Table)
                .columns([
                    ShoppingItem::Id,
                    ShoppingItem::Name,
                    ShoppingItem::Quantity,
                    ShoppingItem::IsPurchased,
                    ShoppingItem::RecipeId,
                    ShoppingItem::AddedAt,
                ])
                .values_panic([
                    Ulid::new().to_string().into(),
                    name.into(),
                    quantity.into(),
                    false.into(),
                    recipe_id.map(str::to_owned).into(),
                    weekmenu_shared::now().into(),
                ])
                .build_sqlx(SqliteQueryBuilder),
        };

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
