use temp_dir::TempDir;
use weekmenu_recipe::{Command, CreateInput, Query, UpdateInput};
use weekmenu_shared::Error;

mod helpers;

fn create_input(title: &str) -> CreateInput {
    CreateInput {
        recipe_id: None,
        title: title.to_owned(),
        image_url: Some("".to_owned()),
        recipe_url: "https://example.com/recipes/1".to_owned(),
        ingredients: "卵 2個\n牛乳 200ml".to_owned(),
        description: Some("朝ごはん".to_owned()),
    }
}

#[tokio::test]
async fn test_create_and_update_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let id = command.create(create_input(" オムレツ ")).await?;

    let recipe = query.find(&id).await?.unwrap();
    assert_eq!(recipe.title, "オムレツ");
    assert_eq!(recipe.recipe_id, format!("manual-{id}"));
    assert_eq!(recipe.image_url, None);
    assert_eq!(recipe.ingredient_list(), vec!["卵 2個", "牛乳 200ml"]);

    command
        .update(
            &id,
            UpdateInput {
                title: "チーズオムレツ".to_owned(),
                image_url: None,
                recipe_url: "https://example.com/recipes/2".to_owned(),
                ingredients: "卵 2個,チーズ 20g".to_owned(),
                description: None,
            },
        )
        .await?;

    let recipe = query.find(&id).await?.unwrap();
    assert_eq!(recipe.title, "チーズオムレツ");
    assert_eq!(recipe.recipe_id, format!("manual-{id}"));
    assert_eq!(recipe.ingredient_list(), vec!["卵 2個", "チーズ 20g"]);
    assert_eq!(recipe.description, None);

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_and_duplicate() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());

    let err = command
        .create(CreateInput {
            recipe_url: "not a url".to_owned(),
            ..create_input("")
        })
        .await
        .unwrap_err();

    let Error::Validate(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    assert!(errors.field_errors().contains_key("title"));
    assert!(errors.field_errors().contains_key("recipe_url"));

    command
        .create(CreateInput {
            recipe_id: Some("9999".to_owned()),
            ..create_input("スープ")
        })
        .await?;

    let err = command
        .create(CreateInput {
            recipe_id: Some("9999".to_owned()),
            ..create_input("スープ")
        })
        .await
        .unwrap_err();

    let Error::Validate(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    assert!(errors.field_errors().contains_key("recipe_id"));

    Ok(())
}

#[tokio::test]
async fn test_update_unknown_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);

    let err = command
        .update(
            "01ZZZZZZZZZZZZZZZZZZZZZZZZ",
            UpdateInput {
                title: "x".to_owned(),
                recipe_url: "https://example.com".to_owned(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}
