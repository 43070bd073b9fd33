use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use validator::Validate;

/// A recipe as described by the search API or by the weekly assign form.
///
/// Both the API field names (`recipeTitle`, `foodImageUrl`, `recipeMaterial`,
/// ...) and the form names (`title`, `imageUrl`, `ingredients`, ...) are
/// accepted. Serializes with the form names.
#[derive(Validate, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDescriptor {
    #[validate(length(min = 1, max = 100))]
    #[serde(deserialize_with = "string_or_number")]
    pub recipe_id: String,
    #[validate(length(min = 1, max = 255))]
    #[serde(alias = "recipeTitle")]
    pub title: String,
    #[serde(
        default,
        alias = "foodImageUrl",
        deserialize_with = "non_empty_string"
    )]
    pub image_url: Option<String>,
    #[serde(default)]
    pub recipe_url: String,
    #[serde(default, alias = "recipeMaterial", deserialize_with = "text_or_list")]
    pub ingredients: String,
    #[serde(
        default,
        alias = "recipeDescription",
        deserialize_with = "non_empty_string"
    )]
    pub description: Option<String>,
}

impl RecipeDescriptor {
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// JSON used as the value of a picker option on the assign page.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(value.trim().to_owned()),
        Value::Number(value) => Ok(value.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

fn non_empty_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(value) if !value.trim().is_empty() => Ok(Some(value.trim().to_owned())),
        _ => Ok(None),
    }
}

fn text_or_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(value),
        Value::Array(values) => Ok(values
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(",")),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or list, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_search_api_records() {
        let value = json!({
            "recipeId": 1760028309,
            "recipeTitle": "肉じゃが",
            "recipeUrl": "https://recipe.rakuten.co.jp/recipe/1760028309/",
            "foodImageUrl": "https://image.space.rakuten.co.jp/a.jpg",
            "recipeMaterial": ["じゃがいも", "にんじん", "牛肉"],
            "recipeDescription": "",
            "rank": "1"
        });

        let descriptor = RecipeDescriptor::from_value(&value).unwrap();

        assert_eq!(descriptor.recipe_id, "1760028309");
        assert_eq!(descriptor.title, "肉じゃが");
        assert_eq!(
            descriptor.image_url.as_deref(),
            Some("https://image.space.rakuten.co.jp/a.jpg")
        );
        assert_eq!(descriptor.ingredients, "じゃがいも,にんじん,牛肉");
        assert_eq!(descriptor.description, None);
    }

    #[test]
    fn reads_assign_form_records() {
        let value = json!({
            "recipeId": "abc",
            "title": "カレー",
            "imageUrl": "",
            "recipeUrl": "https://example.com/curry",
            "ingredients": "にんじん 1本\nたまねぎ 2個"
        });

        let descriptor: RecipeDescriptor = serde_json::from_value(value).unwrap();

        assert_eq!(descriptor.recipe_id, "abc");
        assert_eq!(descriptor.image_url, None);
        assert_eq!(descriptor.ingredients, "にんじん 1本\nたまねぎ 2個");
    }

    #[test]
    fn serialized_form_reads_back() {
        let descriptor = RecipeDescriptor {
            recipe_id: "42".to_owned(),
            title: "味噌汁".to_owned(),
            image_url: Some("https://example.com/a.png".to_owned()),
            recipe_url: "https://example.com/42".to_owned(),
            ingredients: "豆腐,わかめ".to_owned(),
            description: None,
        };

        let value: Value = serde_json::from_str(&descriptor.to_json()).unwrap();
        assert_eq!(value["recipeId"], "42");
        assert_eq!(value["imageUrl"], "https://example.com/a.png");
        assert_eq!(RecipeDescriptor::from_value(&value).unwrap(), descriptor);
    }

    #[test]
    fn rejects_records_without_id_or_title() {
        assert!(RecipeDescriptor::from_value(&json!({"recipeTitle": "x"})).is_none());
        assert!(RecipeDescriptor::from_value(&json!({"recipeId": true, "title": "x"})).is_none());

        let descriptor = RecipeDescriptor::from_value(&json!({"recipeId": "", "title": ""})).unwrap();
        assert!(descriptor.validate().is_err());
    }
}
