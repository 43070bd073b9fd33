pub mod detail;
pub mod edit;
pub mod index;

use serde::Deserialize;

/// Fields shared by the create and edit forms.
#[derive(Deserialize, Default, Clone)]
pub struct RecipeForm {
    #[serde(default)]
    pub recipe_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub recipe_url: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub description: String,
}

impl From<weekmenu_recipe::RecipeRow> for RecipeForm {
    fn from(recipe: weekmenu_recipe::RecipeRow) -> Self {
        Self {
            recipe_id: recipe.recipe_id,
            title: recipe.title,
            image_url: recipe.image_url.unwrap_or_default(),
            recipe_url: recipe.recipe_url,
            ingredients: recipe.ingredients,
            description: recipe.description.unwrap_or_default(),
        }
    }
}
