use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use weekmenu_recipe::RecipeDescriptor;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "recipe-suggestions.html")]
pub struct SuggestionsTemplate {
    pub current_path: String,
    pub ingredient_names: Vec<String>,
    pub recipes: Vec<RecipeDescriptor>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let state = super::load_state(&app, &jar).await;
    let ingredient_names = crate::try_page_response!(
        app.pantry_query.find_names(&state.selected_ids),
        template
    );

    let recipes = state
        .results
        .iter()
        .filter_map(RecipeDescriptor::from_value)
        .collect();

    template
        .render(SuggestionsTemplate {
            current_path: "plan".to_owned(),
            ingredient_names,
            recipes,
        })
        .into_response()
}
