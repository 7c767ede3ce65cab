use serde::Deserialize;

use crate::{
    data::{
        client::id_filter,
        normalize::{normalize_join, JoinValue},
        query::ListQuery,
        PostgrestClient,
    },
    error::backend::BackendError,
    model::vehicle::{EntityKind, MakeRef, ModelPayload, VehicleModel, VehicleModelWithMake},
};

const MODEL_COLUMNS: &str = "id,make_id,name,abrv";
const MODEL_WITH_MAKE_COLUMNS: &str = "id,name,abrv,make_id,VehicleMake(name)";

/// A model row as returned by the backend, before the join is normalized.
#[derive(Debug, Deserialize)]
struct ModelRow {
    id: i64,
    make_id: i64,
    name: String,
    abrv: String,
    #[serde(rename = "VehicleMake", default)]
    vehicle_make: Option<JoinValue<MakeRef>>,
}

impl From<ModelRow> for VehicleModelWithMake {
    fn from(row: ModelRow) -> Self {
        Self {
            id: row.id,
            make_id: row.make_id,
            name: row.name,
            abrv: row.abrv,
            vehicle_make: normalize_join(row.vehicle_make),
        }
    }
}

pub struct ModelRepository<'a> {
    client: &'a PostgrestClient,
}

impl<'a> ModelRepository<'a> {
    /// Creates a new instance of [`ModelRepository`]
    pub fn new(client: &'a PostgrestClient) -> Self {
        Self { client }
    }

    /// Fetches one page of models with their manufacturer name embedded
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<VehicleModelWithMake>, BackendError> {
        let rows: Vec<ModelRow> = self
            .client
            .select(
                EntityKind::Model.table(),
                MODEL_WITH_MAKE_COLUMNS,
                &query.to_params(),
            )
            .await?;

        Ok(rows.into_iter().map(VehicleModelWithMake::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<VehicleModelWithMake>, BackendError> {
        let rows: Vec<ModelRow> = self
            .client
            .select(
                EntityKind::Model.table(),
                MODEL_WITH_MAKE_COLUMNS,
                &[id_filter(id)],
            )
            .await?;

        Ok(rows.into_iter().next().map(VehicleModelWithMake::from))
    }

    pub async fn create(&self, model: &ModelPayload) -> Result<VehicleModel, BackendError> {
        self.client
            .insert(EntityKind::Model.table(), MODEL_COLUMNS, model)
            .await
    }

    /// Replaces every editable field of a model
    ///
    /// Returns `Ok(None)` if the model does not exist.
    pub async fn update(
        &self,
        id: i64,
        model: &ModelPayload,
    ) -> Result<Option<VehicleModel>, BackendError> {
        self.client
            .update(EntityKind::Model.table(), MODEL_COLUMNS, id, model)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.client.delete(EntityKind::Model.table(), id).await
    }
}
