use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use weekmenu_pantry::AddInput;
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

#[allow(dead_code)]
pub fn add_input(name: impl Into<String>) -> AddInput {
    AddInput {
        name: name.into(),
        quantity: "1".to_owned(),
        purchase_date: "2026-10-19".to_owned(),
        expiration_date: "2026-10-26".to_owned(),
        memo: None,
        storage_method: "冷蔵".to_owned(),
    }
}

#[allow(dead_code)]
pub async fn add_all(
    cmd: &weekmenu_pantry::Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        ids.push(cmd.add(add_input(name)).await?);
    }

    Ok(ids)
}
