use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Recipe, WeeklyMenu};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(WeeklyMenu::Table)
        .col(
            ColumnDef::new(WeeklyMenu::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(WeeklyMenu::WeekOf).big_integer().not_null())
        .col(ColumnDef::new(WeeklyMenu::Weekday).integer().not_null())
        .col(
            ColumnDef::new(WeeklyMenu::RecipeId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(WeeklyMenu::Memo).text().null())
        .col(ColumnDef::new(WeeklyMenu::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(WeeklyMenu::UpdatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_weekly_menu_recipe")
                .from(WeeklyMenu::Table, WeeklyMenu::RecipeId)
                .to(Recipe::Table, Recipe::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(WeeklyMenu::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateWeekOfWeekdayIdx;

fn create_week_of_weekday_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_weekly_menu_week_of_weekday")
        .table(WeeklyMenu::Table)
        .col(WeeklyMenu::WeekOf)
        .col(WeeklyMenu::Weekday)
        .unique()
        .to_owned()
}

fn drop_week_of_weekday_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_weekly_menu_week_of_weekday")
        .table(WeeklyMenu::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateWeekOfWeekdayIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_week_of_weekday_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_week_of_weekday_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
