use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use weekmenu_recipe::RecipeRow;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(Deserialize, Default)]
pub struct DetailQuery {
    pub added: Option<usize>,
}

#[derive(askama::Template)]
#[template(path = "recipes-detail.html")]
pub struct DetailTemplate {
    pub current_path: String,
    pub recipe: RecipeRow,
    pub missing: Vec<String>,
    pub added: Option<usize>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
    Query(query): Query<DetailQuery>,
) -> impl IntoResponse {
    let recipe = crate::try_page_response!(opt: app.recipe_query.find(&id), template);
    let pantry = crate::try_page_response!(app.pantry_query.names(), template);
    let missing = weekmenu_recipe::gap::missing_ingredients(&recipe.ingredients, &pantry);

    template
        .render(DetailTemplate {
            current_path: "recipes".to_owned(),
            recipe,
            missing,
            added: query.added,
        })
        .into_response()
}
