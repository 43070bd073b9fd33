use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use serde_json::json;
use weekmenu_recipe::RecipeRow;
use weekmenu_shopping::ShoppingItemRow;

use crate::{
    routes::{AppState, is_async},
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "shopping-list.html")]
pub struct ShoppingListTemplate {
    pub current_path: String,
    pub unpurchased: Vec<ShoppingItemRow>,
    pub purchased: Vec<ShoppingItemRow>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let list = crate::try_page_response!(app.shopping_query.list(), template);

    template
        .render(ShoppingListTemplate {
            current_path: "shopping-list".to_owned(),
            unpurchased: list.unpurchased,
            purchased: list.purchased,
        })
        .into_response()
}

#[derive(askama::Template)]
#[template(path = "shopping-list-add.html")]
pub struct AddTemplate {
    pub current_path: String,
    pub recipe: RecipeRow,
    pub missing: Vec<String>,
}

pub async fn add_page(
    template: Template,
    State(app): State<AppState>,
    Path((recipe_id,)): Path<(String,)>,
) -> impl IntoResponse {
    let recipe = crate::try_page_response!(opt: app.recipe_query.find(&recipe_id), template);
    let pantry = crate::try_page_response!(app.pantry_query.names(), template);
    let missing = weekmenu_recipe::gap::missing_ingredients(&recipe.ingredients, &pantry);

    template
        .render(AddTemplate {
            current_path: "shopping-list".to_owned(),
            recipe,
            missing,
        })
        .into_response()
}

#[derive(Deserialize, Default)]
pub struct AddForm {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

pub async fn add_action(
    template: Template,
    State(app): State<AppState>,
    Path((recipe_id,)): Path<(String,)>,
    Form(form): Form<AddForm>,
) -> impl IntoResponse {
    let recipe = crate::try_page_response!(opt: app.recipe_query.find(&recipe_id), template);
    let added = app
        .shopping_command
        .merge(&form.ingredients, Some(recipe.id.as_str()))
        .await;

    tracing::info!(recipe = recipe.id, added, "missing ingredients added to shopping list");

    Redirect::to(&format!("/recipes/{}?added={added}", recipe.id)).into_response()
}

fn not_found(template: &Template, headers: &HeaderMap) -> Response {
    if is_async(headers) {
        return (StatusCode::NOT_FOUND, Json(json!({"status": "error"}))).into_response();
    }

    template.not_found()
}

fn server_error(template: &Template, headers: &HeaderMap) -> Response {
    if is_async(headers) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error"})),
        )
            .into_response();
    }

    template.server_error()
}

pub async fn toggle(
    template: Template,
    headers: HeaderMap,
    State(app): State<AppState>,
    Path((item_id,)): Path<(String,)>,
) -> impl IntoResponse {
    let is_purchased = match app.shopping_command.toggle(&item_id).await {
        Ok(Some(is_purchased)) => is_purchased,
        Ok(_) => return not_found(&template, &headers),
        Err(err) => {
            tracing::error!(item = item_id, err = %err, "failed to toggle shopping item");

            return server_error(&template, &headers);
        }
    };

    if is_async(&headers) {
        return Json(json!({"status": "success", "is_purchased": is_purchased})).into_response();
    }

    Redirect::to("/shopping-list").into_response()
}

pub async fn delete(
    template: Template,
    headers: HeaderMap,
    State(app): State<AppState>,
    Path((item_id,)): Path<(String,)>,
) -> impl IntoResponse {
    match app.shopping_command.delete(&item_id).await {
        Ok(true) => {}
        Ok(false) => return not_found(&template, &headers),
        Err(err) => {
            tracing::error!(item = item_id, err = %err, "failed to delete shopping item");

            return server_error(&template, &headers);
        }
    }

    if is_async(&headers) {
        return Json(json!({"status": "success"})).into_response();
    }

    Redirect::to("/shopping-list").into_response()
}

pub async fn missing(
    State(app): State<AppState>,
    Path((recipe_id,)): Path<(String,)>,
) -> impl IntoResponse {
    let pantry = match app.pantry_query.names().await {
        Ok(names) => names,
        Err(err) => {
            tracing::error!(err = %err, "failed to load pantry names");

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error"})),
            )
                .into_response();
        }
    };

    match app
        .recipe_query
        .missing_ingredients(&recipe_id, &pantry)
        .await
    {
        Ok(Some(missing)) => Json(json!({
            "missing_count": missing.len(),
            "missing_ingredients": missing,
        }))
        .into_response(),
        Ok(_) => (StatusCode::NOT_FOUND, Json(json!({"status": "error"}))).into_response(),
        Err(err) => {
            tracing::error!(recipe = recipe_id, err = %err, "failed to check missing ingredients");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error"})),
            )
                .into_response()
        }
    }
}
