use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use weekmenu_recipe::RecipeDescriptor;
use weekmenu_shared::State;

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    weekmenu_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

pub fn descriptor(recipe_id: &str, title: &str) -> RecipeDescriptor {
    RecipeDescriptor {
        recipe_id: recipe_id.to_owned(),
        title: title.to_owned(),
        image_url: None,
        recipe_url: format!("https://recipe.example.com/{recipe_id}"),
        ingredients: "にんじん,たまねぎ".to_owned(),
        description: None,
    }
}
