use temp_dir::TempDir;
use weekmenu_pantry::{AddInput, Command, Query, StorageMethod};
use weekmenu_shared::Error;

mod helpers;

#[tokio::test]
async fn test_add_ingredient() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let id = command
        .add(AddInput {
            name: " にんじん ".to_owned(),
            quantity: "2本".to_owned(),
            purchase_date: "2026-10-19".to_owned(),
            expiration_date: "2026-10-30".to_owned(),
            memo: Some("料理用".to_owned()),
            storage_method: "冷凍".to_owned(),
        })
        .await?;

    let row = query.find(&id).await?.unwrap();
    assert_eq!(row.name, "にんじん");
    assert_eq!(row.quantity, "2本");
    assert_eq!(row.purchase_date(), "2026-10-19");
    assert_eq!(row.expiration_date(), "2026-10-30");
    assert_eq!(row.memo.as_deref(), Some("料理用"));
    assert_eq!(row.storage_method.0, StorageMethod::Frozen);

    Ok(())
}

#[tokio::test]
async fn test_add_invalid_ingredient_saves_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let err = command
        .add(AddInput {
            expiration_date: "tomorrow".to_owned(),
            storage_method: "冷蔵庫".to_owned(),
            ..helpers::add_input("たまねぎ")
        })
        .await
        .unwrap_err();

    let Error::Validate(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    let fields = errors.field_errors();
    assert!(fields.contains_key("expiration_date"));
    assert!(fields.contains_key("storage_method"));

    assert!(query.all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_add_with_only_bad_purchase_date_is_a_validation_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let err = command
        .add(AddInput {
            purchase_date: "2026-02-30".to_owned(),
            ..helpers::add_input("キャベツ")
        })
        .await
        .unwrap_err();

    let Error::Validate(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    let fields = errors.field_errors();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["purchase_date"][0].code, "date");

    assert!(query.all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_list_and_names() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let ids = helpers::add_all(&command, ["にんじん", "じゃがいも", "たまねぎ"]).await?;

    let all = query.all().await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, ids[0]);

    let mut names = query.names().await?;
    names.sort();
    assert_eq!(names, vec!["じゃがいも", "たまねぎ", "にんじん"]);

    let selected = query
        .find_names(&[
            ids[2].to_owned(),
            "01ZZZZZZZZZZZZZZZZZZZZZZZZ".to_owned(),
            ids[0].to_owned(),
        ])
        .await?;
    assert_eq!(selected, vec!["たまねぎ", "にんじん"]);

    assert!(query.find_names(&[]).await?.is_empty());

    Ok(())
}
