use axum::{
    Router,
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::{session::WorkflowStore, template::Template};

mod health;
mod index;
mod ingredients;
mod plan;
mod recipes;
mod shopping;
mod weekly_menu;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub pantry_command: weekmenu_pantry::Command,
    pub pantry_query: weekmenu_pantry::Query,
    pub recipe_command: weekmenu_recipe::Command,
    pub recipe_query: weekmenu_recipe::Query,
    pub mealplan_command: weekmenu_mealplan::Command,
    pub mealplan_query: weekmenu_mealplan::Query,
    pub shopping_command: weekmenu_shopping::Command,
    pub shopping_query: weekmenu_shopping::Query,
    pub search: weekmenu_search::RecipeSearch,
    pub sessions: WorkflowStore,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(
        config: crate::config::Config,
        state: weekmenu_shared::State,
        sessions: WorkflowStore,
    ) -> Self {
        let search = weekmenu_search::RecipeSearch::new(config.rakuten.search_config());

        Self {
            config,
            pantry_command: weekmenu_pantry::Command::new(state.clone()),
            pantry_query: weekmenu_pantry::Query(state.read_db.clone()),
            recipe_command: weekmenu_recipe::Command::new(state.clone()),
            recipe_query: weekmenu_recipe::Query(state.read_db.clone()),
            mealplan_command: weekmenu_mealplan::Command::new(state.clone()),
            mealplan_query: weekmenu_mealplan::Query(state.read_db.clone()),
            shopping_command: weekmenu_shopping::Command::new(state.clone()),
            shopping_query: weekmenu_shopping::Query(state.read_db.clone()),
            search,
            sessions,
            pool: state.read_db,
        }
    }
}

/// Whether the request was sent by the page script rather than a form.
pub(crate) fn is_async(headers: &HeaderMap) -> bool {
    headers
        .get("X-Requested-With")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/ingredients", get(ingredients::page))
        .route(
            "/ingredients/add",
            get(ingredients::add_page).post(ingredients::add_action),
        )
        .route("/recipes", get(recipes::index::page))
        .route(
            "/recipes/create",
            get(recipes::index::create_page).post(recipes::index::create_action),
        )
        .route("/recipes/{id}", get(recipes::detail::page))
        .route(
            "/recipes/{id}/edit",
            get(recipes::edit::page).post(recipes::edit::action),
        )
        .route("/shopping-list", get(shopping::page))
        .route(
            "/shopping-list/add/{recipe_id}",
            get(shopping::add_page).post(shopping::add_action),
        )
        .route("/shopping-list/toggle/{item_id}", post(shopping::toggle))
        .route("/shopping-list/delete/{item_id}", post(shopping::delete))
        .route("/shopping-list/missing/{recipe_id}", get(shopping::missing))
        .route(
            "/select-ingredients",
            get(plan::select::page).post(plan::select::action),
        )
        .route("/search-recipes", get(plan::search::page))
        .route("/recipe-suggestions", get(plan::suggestions::page))
        .route("/assign-recipes", get(plan::assign::page))
        .route("/save-weekly-menu", post(plan::save::action))
        .route("/weekly-menu", get(weekly_menu::page))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
