use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::{Date, Duration};
use weekmenu_db::table::WeeklyMenu;
use weekmenu_recipe::RecipeRow;

use crate::DAYS_IN_WEEK;

#[derive(Debug, Clone, FromRow)]
pub struct WeekMenuRow {
    pub id: String,
    pub weekday: u8,
    pub recipe_id: String,
    pub memo: Option<String>,
}

/// One day of a week view.
#[derive(Debug, Clone)]
pub struct WeekSlot {
    pub date: Date,
    pub weekday: u8,
    pub menu_id: Option<String>,
    pub memo: Option<String>,
    pub recipe: Option<RecipeRow>,
}

impl WeekSlot {
    pub fn date(&self) -> String {
        weekmenu_shared::format_date(self.date)
    }
}

impl super::Query {
    pub async fn rows(&self, week: Date) -> anyhow::Result<Vec<WeekMenuRow>> {
        let week_of = weekmenu_shared::to_timestamp(weekmenu_shared::week_start(week));
        let statement = sea_query::Query::select()
            .columns([
                WeeklyMenu::Id,
                WeeklyMenu::Weekday,
                WeeklyMenu::RecipeId,
                WeeklyMenu::Memo,
            ])
            .from(WeeklyMenu::Table)
            .and_where(Expr::col(WeeklyMenu::WeekOf).eq(week_of))
            .order_by(WeeklyMenu::Weekday, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, WeekMenuRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Seven slots, Monday first, for the week containing `week`.
    ///
    /// Fails when the week runs past the last representable date.
    pub async fn week(&self, week: Date) -> anyhow::Result<Vec<WeekSlot>> {
        let start = weekmenu_shared::week_start(week);
        let rows = self.rows(start).await?;
        let ids = rows.iter().map(|row| row.recipe_id.to_owned()).collect::<Vec<_>>();
        let recipes = weekmenu_recipe::Query(self.0.clone()).find_many(&ids).await?;

        let slots = (0..DAYS_IN_WEEK)
            .map(|weekday| {
                let Some(date) = start.checked_add(Duration::days(weekday.into())) else {
                    anyhow::bail!("week of {start} runs past the last supported date");
                };

                let row = rows.iter().find(|row| row.weekday == weekday);
                let recipe = row.and_then(|row| {
                    recipes
                        .iter()
                        .find(|recipe| recipe.id == row.recipe_id)
                        .cloned()
                });

                Ok(WeekSlot {
                    date,
                    weekday,
                    menu_id: row.map(|row| row.id.to_owned()),
                    memo: row.and_then(|row| row.memo.to_owned()),
                    recipe,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(slots)
    }
}
