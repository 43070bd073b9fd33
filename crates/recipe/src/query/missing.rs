impl super::Query {
    /// Ingredients of recipe `id` missing from `pantry`, or `None` when the
    /// recipe does not exist.
    pub async fn missing_ingredients<S: AsRef<str>>(
        &self,
        id: impl Into<String>,
        pantry: &[S],
    ) -> anyhow::Result<Option<Vec<String>>> {
        let Some(recipe) = self.find(id).await? else {
            return Ok(None);
        };

        Ok(Some(crate::gap::missing_ingredients(
            &recipe.ingredients,
            pantry,
        )))
    }
}
