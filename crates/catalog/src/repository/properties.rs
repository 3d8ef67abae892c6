use super::CatalogRepository;
use crate::error::ModelResult;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::query::{build_property_search, to_cents, InsertQuery, PropertySearchCriteria, DEFAULT_LIMIT};

impl CatalogRepository {
    /// Search properties matching `criteria`, cheapest first.
    ///
    /// `limit` defaults to 10. Properties with the same price come back in
    /// storage order, which is unspecified.
    pub async fn search_properties(
        &self,
        criteria: &PropertySearchCriteria,
        limit: Option<u32>,
    ) -> ModelResult<Vec<PropertyListing>> {
        let (sql, params) = build_property_search(criteria, limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch_models(&sql, &params).await
    }

    /// Insert an active property; the price is converted to cents.
    pub async fn create_property(&self, property: NewProperty) -> ModelResult<Property> {
        let (sql, params) = InsertQuery::into_table("properties")
            .value("owner_id", property.owner_id)
            .value("title", property.title)
            .value("description", property.description)
            .value("thumbnail_photo_url", property.thumbnail_photo_url)
            .value("cover_photo_url", property.cover_photo_url)
            .value("cost_per_night", to_cents(property.cost_per_night))
            .value("parking_spaces", property.parking_spaces)
            .value("number_of_bathrooms", property.number_of_bathrooms)
            .value("number_of_bedrooms", property.number_of_bedrooms)
            .value("country", property.country)
            .value("street", property.street)
            .value("city", property.city)
            .value("province", property.province)
            .value("post_code", property.post_code)
            .literal("active", "TRUE")
            .returning(&["*"])
            .to_sql_with_params();

        let created: Property = self.insert_returning(&sql, &params).await?;
        tracing::info!(property_id = created.id, owner_id = created.owner_id, "Property created");
        Ok(created)
    }
}
