use axum::http::StatusCode;
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_search_without_session_goes_back_to_selection() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let response = app.get("/search-recipes").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(helpers::location(&response), "/select-ingredients");

    Ok(())
}

#[tokio::test]
async fn test_empty_selection_rerenders_selection() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;
    helpers::add_ingredient(&app, "にんじん").await?;

    let response = app.post_form("/select-ingredients", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(helpers::session_cookie(&response).is_none());

    let body = helpers::body_string(response).await;
    assert!(body.contains("食材を1つ以上選んでください。"));

    Ok(())
}

#[tokio::test]
async fn test_workflow_survives_unreachable_search_api() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;
    let carrot = helpers::add_ingredient(&app, "にんじん").await?;
    helpers::add_ingredient(&app, "玉ねぎ").await?;

    let response = app
        .post_form("/select-ingredients", &[("ingredients", carrot.as_str())])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(helpers::location(&response), "/search-recipes");

    let cookie = helpers::session_cookie(&response).unwrap();
    assert!(cookie.starts_with("weekmenu_session="));

    let response = app
        .send(
            axum::http::Request::builder()
                .uri("/search-recipes")
                .header("cookie", &cookie)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(helpers::location(&response), "/recipe-suggestions");

    let response = app
        .send(
            axum::http::Request::builder()
                .uri("/select-ingredients")
                .header("cookie", &cookie)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    let body = helpers::body_string(response).await;
    assert!(body.contains(&format!(r#"value="{carrot}" checked"#)));

    let response = app
        .send(
            axum::http::Request::builder()
                .uri("/recipe-suggestions")
                .header("cookie", &cookie)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = helpers::body_string(response).await;
    assert!(body.contains("にんじん"));
    assert!(body.contains("レシピが見つかりませんでした。"));

    Ok(())
}

#[tokio::test]
async fn test_selection_of_removed_ingredients_renders_search_page() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let response = app
        .post_form("/select-ingredients", &[("ingredients", "gone")])
        .await;
    let cookie = helpers::session_cookie(&response).unwrap();

    let response = app
        .send(
            axum::http::Request::builder()
                .uri("/search-recipes")
                .header("cookie", &cookie)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_save_rejects_malformed_data() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    for data in [
        "",
        "not json",
        r#"{"0": {"title": "no id"}}"#,
        "{}",
        r#"{"9": {"recipeId": 1, "title": "x"}}"#,
    ] {
        let response = app
            .post_form("/save-weekly-menu", &[("recipes_data", data)])
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{data}");
        assert_eq!(helpers::location(&response), "/assign-recipes", "{data}");
    }

    let response = app.post_form("/save-weekly-menu", &[]).await;
    assert_eq!(helpers::location(&response), "/assign-recipes");

    assert!(app.state.recipe_query.all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_save_stores_current_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let data = json!({
        "0": {
            "recipeId": 1001,
            "title": "肉じゃが",
            "recipeUrl": "https://recipe.example.com/1001",
            "ingredients": "にんじん 2本,じゃがいも 3個"
        },
        "2": null,
        "4": {
            "recipeId": "1002",
            "title": "カレー",
            "imageUrl": "",
            "recipeUrl": "https://recipe.example.com/1002"
        }
    })
    .to_string();

    let response = app
        .post_form("/save-weekly-menu", &[("recipes_data", data.as_str())])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(helpers::location(&response), "/weekly-menu");

    let week = app
        .state
        .mealplan_query
        .week(weekmenu_shared::current_week_start())
        .await?;
    assert_eq!(week.len(), 7);
    assert_eq!(
        week[0].recipe.as_ref().map(|r| r.title.as_str()),
        Some("肉じゃが")
    );
    assert!(week[2].recipe.is_none());
    assert_eq!(
        week[4].recipe.as_ref().map(|r| r.recipe_id.as_str()),
        Some("1002")
    );

    let body = helpers::body_string(app.get("/weekly-menu").await).await;
    assert!(body.contains("肉じゃが"));
    assert!(body.contains("金曜日"));

    Ok(())
}
