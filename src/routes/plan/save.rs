use std::collections::{BTreeMap, HashMap};

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use serde_json::Value;
use weekmenu_recipe::RecipeDescriptor;

use crate::{routes::AppState, template::Template};

#[derive(Deserialize, Default)]
pub struct SaveForm {
    pub recipes_data: Option<String>,
}

/// Parses `{"<weekday>": <recipe>, ...}`. Days left empty (`null`) are
/// skipped; any other malformed part rejects the whole payload.
pub fn parse_recipes_data(data: &str) -> Option<BTreeMap<u8, RecipeDescriptor>> {
    let raw: HashMap<String, Value> = serde_json::from_str(data).ok()?;
    let mut entries = BTreeMap::new();

    for (weekday, value) in raw {
        if value.is_null() {
            continue;
        }

        let weekday = weekday.trim().parse::<u8>().ok()?;
        let descriptor: RecipeDescriptor = serde_json::from_value(value).ok()?;
        entries.insert(weekday, descriptor);
    }

    Some(entries)
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(form): Form<SaveForm>,
) -> impl IntoResponse {
    let Some(entries) = form
        .recipes_data
        .as_deref()
        .and_then(parse_recipes_data)
        .filter(|entries| !entries.is_empty())
    else {
        return Redirect::to("/assign-recipes").into_response();
    };

    match app.mealplan_command.save_current_week(&entries).await {
        Ok(saved) => {
            tracing::info!(saved, "weekly menu saved from assignment");

            Redirect::to("/weekly-menu").into_response()
        }
        Err(weekmenu_shared::Error::Validate(errors)) => {
            tracing::warn!(err = %errors, "rejected weekly menu");

            Redirect::to("/assign-recipes").into_response()
        }
        Err(err) => {
            tracing::error!(err = %err, "failed to save weekly menu");

            template.server_error()
        }
    }
}
