use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::Form;
use weekmenu_recipe::{CreateInput, RecipeRow};
use weekmenu_shared::FieldErrors;

use super::RecipeForm;
use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "recipes.html")]
pub struct RecipesTemplate {
    pub current_path: String,
    pub recipes: Vec<RecipeRow>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let recipes = crate::try_page_response!(app.recipe_query.all(), template);

    template
        .render(RecipesTemplate {
            current_path: "recipes".to_owned(),
            recipes,
        })
        .into_response()
}

#[derive(askama::Template)]
#[template(path = "recipes-create.html")]
pub struct CreateTemplate {
    pub current_path: String,
    pub form: RecipeForm,
    pub errors: FieldErrors,
}

impl Default for CreateTemplate {
    fn default() -> Self {
        Self {
            current_path: "recipes".to_owned(),
            form: RecipeForm::default(),
            errors: FieldErrors::default(),
        }
    }
}

pub async fn create_page(template: Template) -> impl IntoResponse {
    template.render(CreateTemplate::default())
}

pub async fn create_action(
    template: Template,
    State(app): State<AppState>,
    Form(form): Form<RecipeForm>,
) -> impl IntoResponse {
    let input = CreateInput {
        recipe_id: Some(form.recipe_id.to_owned()),
        title: form.title.to_owned(),
        image_url: Some(form.image_url.to_owned()),
        recipe_url: form.recipe_url.to_owned(),
        ingredients: form.ingredients.to_owned(),
        description: Some(form.description.to_owned()),
    };

    match app.recipe_command.create(input).await {
        Ok(id) => Redirect::to(&format!("/recipes/{id}")).into_response(),
        Err(weekmenu_shared::Error::Validate(errors)) => template
            .render(CreateTemplate {
                form,
                errors: FieldErrors::from(&errors),
                ..Default::default()
            })
            .into_response(),
        Err(err) => {
            tracing::error!(err = %err, "failed to create recipe");

            template.server_error()
        }
    }
}
