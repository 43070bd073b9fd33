use std::collections::BTreeMap;

use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;
use ulid::Ulid;
use validator::{Validate, ValidationError, ValidationErrors};
use weekmenu_db::table::WeeklyMenu;
use weekmenu_recipe::RecipeDescriptor;

pub const DAYS_IN_WEEK: u8 = 7;

impl super::Command {
    /// Assigns recipes to the current week, Monday being weekday 0.
    pub async fn save_current_week(
        &self,
        entries: &BTreeMap<u8, RecipeDescriptor>,
    ) -> weekmenu_shared::Result<usize> {
        self.save_week(weekmenu_shared::current_week_start(), entries)
            .await
    }

    /// Assigns one recipe per weekday of the week containing `week`.
    ///
    /// Every referenced recipe is cached on first use and reused after that.
    /// All entries are validated before the first write. Each weekday row is
    /// then replaced on its own; a storage failure part way through keeps the
    /// weekdays already written. Returns the number of weekdays written.
    pub async fn save_week(
        &self,
        week: Date,
        entries: &BTreeMap<u8, RecipeDescriptor>,
    ) -> weekmenu_shared::Result<usize> {
        for (weekday, descriptor) in entries {
            if *weekday >= DAYS_IN_WEEK {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "weekday",
                    ValidationError::new("range")
                        .with_message(format!("weekday {weekday} must be between 0 and 6").into()),
                );

                return Err(errors.into());
            }

            descriptor.validate()?;
        }

        let week_of = weekmenu_shared::to_timestamp(weekmenu_shared::week_start(week));
        let mut saved = 0;

        for (weekday, descriptor) in entries {
            let recipe_id = self.recipe.resolve_or_create(descriptor).await?;
            self.upsert_slot(week_of, *weekday, &recipe_id).await?;
            saved += 1;
        }

        tracing::info!(week_of, saved, "weekly menu saved");

        Ok(saved)
    }

    async fn upsert_slot(
        &self,
        week_of: i64,
        weekday: u8,
        recipe_id: &str,
    ) -> weekmenu_shared::Result<()> {
        let statement = Query::select()
            .column(WeeklyMenu::Id)
            .from(WeeklyMenu::Table)
            .and_where(Expr::col(WeeklyMenu::WeekOf).eq(week_of))
            .and_where(Expr::col(WeeklyMenu::Weekday).eq(weekday))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let existing = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        let now = weekmenu_shared::now();

        let statement = match existing {
            Some((id,)) => Query::update()
                .table(WeeklyMenu::Table)
                .values([
                    (WeeklyMenu::RecipeId, recipe_id.into()),
                    (WeeklyMenu::UpdatedAt, now.into()),
                ])
                .and_where(Expr::col(WeeklyMenu::Id).eq(id))
                .build_sqlx(SqliteQueryBuilder),
            _ => Query::insert()
                .into_table(WeeklyMenu::Table)
                .columns([
                    WeeklyMenu::Id,
                    WeeklyMenu::WeekOf,
                    WeeklyMenu::Weekday,
                    WeeklyMenu::RecipeId,
                    WeeklyMenu::CreatedAt,
                    WeeklyMenu::UpdatedAt,
                ])
                .values_panic([
                    Ulid::new().to_string().into(),
                    week_of.into(),
                    weekday.into(),
                    recipe_id.into(),
                    now.into(),
                    now.into(),
                ])
                .build_sqlx(SqliteQueryBuilder),
        };

        let (sql, values) = statement;
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
