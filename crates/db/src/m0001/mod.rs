mod ingredient;
mod recipe;
mod shopping_item;
mod weekly_menu;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "weekmenu",
    "m0001",
    vec_box![],
    vec_box![
        ingredient::CreateTable,
        recipe::CreateTable,
        recipe::CreateRecipeIdIdx,
        weekly_menu::CreateTable,
        weekly_menu::CreateWeekOfWeekdayIdx,
        shopping_item::CreateTable,
        shopping_item::CreateNameIdx
    ]
);
