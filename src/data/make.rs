use crate::{
    data::{client::id_filter, query::ListQuery, PostgrestClient},
    error::backend::BackendError,
    model::vehicle::{EntityKind, MakePayload, VehicleMake},
};

const MAKE_COLUMNS: &str = "id,name,abrv";

pub struct MakeRepository<'a> {
    client: &'a PostgrestClient,
}

impl<'a> MakeRepository<'a> {
    /// Creates a new instance of [`MakeRepository`]
    pub fn new(client: &'a PostgrestClient) -> Self {
        Self { client }
    }

    /// Fetches one page of makes
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<VehicleMake>, BackendError> {
        self.client
            .select(EntityKind::Make.table(), MAKE_COLUMNS, &query.to_params())
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<VehicleMake>, BackendError> {
        let rows: Vec<VehicleMake> = self
            .client
            .select(EntityKind::Make.table(), MAKE_COLUMNS, &[id_filter(id)])
            .await?;

        Ok(rows.into_iter().next())
    }

    /// Creates a new make, the backend assigns the ID
    pub async fn create(&self, make: &MakePayload) -> Result<VehicleMake, BackendError> {
        self.client
            .insert(EntityKind::Make.table(), MAKE_COLUMNS, make)
            .await
    }

    /// Replaces every editable field of a make
    ///
    /// Returns `Ok(None)` if the make does not exist.
    pub async fn update(
        &self,
        id: i64,
        make: &MakePayload,
    ) -> Result<Option<VehicleMake>, BackendError> {
        self.client
            .update(EntityKind::Make.table(), MAKE_COLUMNS, id, make)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.client.delete(EntityKind::Make.table(), id).await
    }
}
