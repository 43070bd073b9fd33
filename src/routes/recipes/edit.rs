use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::Form;
use weekmenu_recipe::UpdateInput;
use weekmenu_shared::FieldErrors;

use super::RecipeForm;
use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "recipes-edit.html")]
pub struct EditTemplate {
    pub current_path: String,
    pub id: String,
    pub form: RecipeForm,
    pub errors: FieldErrors,
}

impl Default for EditTemplate {
    fn default() -> Self {
        Self {
            current_path: "recipes".to_owned(),
            id: "".to_owned(),
            form: RecipeForm::default(),
            errors: FieldErrors::default(),
        }
    }
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> impl IntoResponse {
    let recipe = crate::try_page_response!(opt: app.recipe_query.find(&id), template);

    template
        .render(EditTemplate {
            id,
            form: recipe.into(),
            ..Default::default()
        })
        .into_response()
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
    Form(form): Form<RecipeForm>,
) -> impl IntoResponse {
    let input = UpdateInput {
        title: form.title.to_owned(),
        image_url: Some(form.image_url.to_owned()),
        recipe_url: form.recipe_url.to_owned(),
        ingredients: form.ingredients.to_owned(),
        description: Some(form.description.to_owned()),
    };

    match app.recipe_command.update(&id, input).await {
        Ok(()) => Redirect::to(&format!("/recipes/{id}")).into_response(),
        Err(weekmenu_shared::Error::Validate(errors)) => template
            .render(EditTemplate {
                id,
                form,
                errors: FieldErrors::from(&errors),
                ..Default::default()
            })
            .into_response(),
        Err(weekmenu_shared::Error::NotFound(_)) => template.not_found(),
        Err(err) => {
            tracing::error!(recipe = id, err = %err, "failed to update recipe");

            template.server_error()
        }
    }
}
