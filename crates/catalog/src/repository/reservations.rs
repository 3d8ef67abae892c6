use super::CatalogRepository;
use crate::error::ModelResult;
use crate::models::ReservationListing;
use crate::query::{build_guest_reservations, DEFAULT_LIMIT};

impl CatalogRepository {
    /// Properties the guest has reserved, earliest stay first.
    ///
    /// Each entry carries the property's average rating across all of its
    /// reviews. `limit` defaults to 10.
    pub async fn list_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Option<u32>,
    ) -> ModelResult<Vec<ReservationListing>> {
        let (sql, params) = build_guest_reservations(guest_id, limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch_models(&sql, &params).await
    }
}
