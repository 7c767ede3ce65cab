use dioxus_logger::tracing;

use crate::{
    data::{
        query::{build_list_query, ListParams, ListQuery},
        MakeRepository, ModelRepository, PostgrestClient,
    },
    error::Error,
    model::{
        list::{MakeListState, ModelListState, SortDirection},
        vehicle::{EntityKind, VehicleMake, VehicleModelWithMake},
    },
    service::{cache::ListCache, mutation::MutationDispatcher},
};

/// Read side of the application: list fetching with memoization and lookups by ID.
#[derive(Clone)]
pub struct ListService {
    client: PostgrestClient,
    makes: ListCache<VehicleMake>,
    models: ListCache<VehicleModelWithMake>,
}

impl ListService {
    /// Creates a new instance of [`ListService`] with empty caches
    pub fn new(client: PostgrestClient) -> Self {
        Self {
            client,
            makes: ListCache::new(),
            models: ListCache::new(),
        }
    }

    /// Returns a mutation dispatcher that invalidates this service's caches
    pub fn dispatcher(&self) -> MutationDispatcher {
        MutationDispatcher::new(
            self.client.clone(),
            self.makes.clone(),
            self.models.clone(),
        )
    }

    /// Fetches the page of makes described by the list state
    ///
    /// # Returns
    /// - `Ok(Vec<VehicleMake>)` - Rows of the requested page, possibly served from cache
    /// - `Err(Error::BackendError)` - Backend request failed
    pub async fn list_makes(&self, state: &MakeListState) -> Result<Vec<VehicleMake>, Error> {
        let query = build_list_query(&ListParams::from(state))?;

        self.fetch_makes(query).await
    }

    /// Fetches every make ordered by name, used for manufacturer dropdowns
    pub async fn all_makes(&self) -> Result<Vec<VehicleMake>, Error> {
        self.fetch_makes(ListQuery::unpaginated("name", SortDirection::Asc))
            .await
    }

    /// Fetches the page of models described by the list state
    ///
    /// # Returns
    /// - `Ok(Vec<VehicleModelWithMake>)` - Rows with normalized manufacturer join
    /// - `Err(Error::ValidationError)` - Manufacturer filter value is not a numeric ID
    /// - `Err(Error::BackendError)` - Backend request failed
    pub async fn list_models(
        &self,
        state: &ModelListState,
    ) -> Result<Vec<VehicleModelWithMake>, Error> {
        let query = build_list_query(&ListParams::from(state))?;

        if let Some(rows) = self.models.get(&query) {
            tracing::debug!("Serving {} models from cache", rows.len());
            return Ok(rows);
        }

        let generation = self.models.generation();
        let rows = ModelRepository::new(&self.client)
            .list(&query)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch models: {}", err);
                err
            })?;

        if !self.models.insert(generation, query, rows.clone()) {
            tracing::debug!("Models changed during fetch, not caching");
        }

        Ok(rows)
    }

    /// Looks up a make for editing
    ///
    /// # Returns
    /// - `Ok(VehicleMake)` - Make found
    /// - `Err(Error::NotFound)` - No make with this ID exists
    /// - `Err(Error::BackendError)` - Backend request failed
    pub async fn find_make(&self, id: i64) -> Result<VehicleMake, Error> {
        MakeRepository::new(&self.client)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: EntityKind::Make,
                id,
            })
    }

    /// Looks up a model with its manufacturer for editing
    pub async fn find_model(&self, id: i64) -> Result<VehicleModelWithMake, Error> {
        ModelRepository::new(&self.client)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: EntityKind::Model,
                id,
            })
    }

    async fn fetch_makes(&self, query: ListQuery) -> Result<Vec<VehicleMake>, Error> {
        if let Some(rows) = self.makes.get(&query) {
            tracing::debug!("Serving {} makes from cache", rows.len());
            return Ok(rows);
        }

        let generation = self.makes.generation();
        let rows = MakeRepository::new(&self.client)
            .list(&query)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch makes: {}", err);
                err
            })?;

        if !self.makes.insert(generation, query, rows.clone()) {
            tracing::debug!("Makes changed during fetch, not caching");
        }

        Ok(rows)
    }
}
