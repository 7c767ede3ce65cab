//! Mutation dispatcher.
//!
//! Wraps create, update and delete for both entity types. Every mutation validates its input
//! before touching the network, deletes require confirmation, and a successful mutation
//! invalidates the cached lists it affects. Failures leave caches untouched.

use dioxus_logger::tracing;

use crate::{
    data::{MakeRepository, ModelRepository, PostgrestClient},
    error::{Action, Error},
    model::vehicle::{
        EntityKind, MakeInput, ModelInput, VehicleMake, VehicleModel, VehicleModelWithMake,
    },
    service::cache::ListCache,
};

pub const DELETE_MAKE_CONFIRMATION: &str = "Are you sure you want to delete this manufacturer?";
pub const DELETE_MODEL_CONFIRMATION: &str = "Are you sure you want to delete this model?";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Result of an action that requires confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<T> {
    /// The backend call was issued and succeeded.
    Performed(T),
    /// The user declined, nothing was sent.
    Declined,
}

/// Submission state of a single form.
///
/// `Idle -> Submitting -> Idle` on success, `Idle -> Submitting -> Failed` on error. A failed
/// state accepts a new submission just like `Idle`, there is no automatic retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl MutationState {
    /// Enters `Submitting`, returns `false` if a submission is already in flight
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }

        *self = Self::Submitting;
        true
    }

    /// Leaves `Submitting` based on the mutation result
    pub fn complete<T>(&mut self, result: &Result<T, Error>, action: Action) {
        *self = match result {
            Ok(_) => Self::Idle,
            Err(err) => Self::Failed(err.user_message(action)),
        };
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Write side of the application.
#[derive(Clone)]
pub struct MutationDispatcher {
    client: PostgrestClient,
    makes: ListCache<VehicleMake>,
    models: ListCache<VehicleModelWithMake>,
}

impl MutationDispatcher {
    pub(crate) fn new(
        client: PostgrestClient,
        makes: ListCache<VehicleMake>,
        models: ListCache<VehicleModelWithMake>,
    ) -> Self {
        Self {
            client,
            makes,
            models,
        }
    }

    /// Creates a make
    ///
    /// # Returns
    /// - `Ok(VehicleMake)` - Created make with its backend-assigned ID
    /// - `Err(Error::ValidationError)` - Input rejected, no backend call was made
    /// - `Err(Error::BackendError)` - Backend rejected the insert
    pub async fn create_make(&self, input: &MakeInput) -> Result<VehicleMake, Error> {
        let payload = input.validate()?;

        let make = MakeRepository::new(&self.client)
            .create(&payload)
            .await
            .map_err(|err| log_failure("create manufacturer", err))?;

        tracing::info!("Created manufacturer {} ({})", make.name, make.id);
        self.invalidate(EntityKind::Make);

        Ok(make)
    }

    /// Replaces a make's fields
    ///
    /// # Returns
    /// - `Ok(VehicleMake)` - Updated make
    /// - `Err(Error::ValidationError)` - Input rejected, no backend call was made
    /// - `Err(Error::NotFound)` - No make with this ID exists
    /// - `Err(Error::BackendError)` - Backend rejected the update
    pub async fn update_make(&self, id: i64, input: &MakeInput) -> Result<VehicleMake, Error> {
        let payload = input.validate()?;

        let make = MakeRepository::new(&self.client)
            .update(id, &payload)
            .await
            .map_err(|err| log_failure("update manufacturer", err))?
            .ok_or(Error::NotFound {
                entity: EntityKind::Make,
                id,
            })?;

        tracing::info!("Updated manufacturer {}", id);
        self.invalidate(EntityKind::Make);

        Ok(make)
    }

    /// Deletes a make after the user confirms
    ///
    /// # Returns
    /// - `Ok(MutationOutcome::Performed(id))` - Make deleted
    /// - `Ok(MutationOutcome::Declined)` - User declined, no backend call was made
    /// - `Err(Error::BackendError)` - Backend rejected the delete
    pub async fn delete_make(
        &self,
        id: i64,
        confirm: &impl Confirm,
    ) -> Result<MutationOutcome<i64>, Error> {
        if !confirm.confirm(DELETE_MAKE_CONFIRMATION) {
            tracing::debug!("Deletion of manufacturer {} declined", id);
            return Ok(MutationOutcome::Declined);
        }

        MakeRepository::new(&self.client)
            .delete(id)
            .await
            .map_err(|err| log_failure("delete manufacturer", err))?;

        tracing::info!("Deleted manufacturer {}", id);
        self.invalidate(EntityKind::Make);

        Ok(MutationOutcome::Performed(id))
    }

    /// Creates a model
    ///
    /// # Returns
    /// - `Ok(VehicleModel)` - Created model with its backend-assigned ID
    /// - `Err(Error::ValidationError)` - Input rejected, no backend call was made
    /// - `Err(Error::BackendError)` - Backend rejected the insert
    pub async fn create_model(&self, input: &ModelInput) -> Result<VehicleModel, Error> {
        let payload = input.validate()?;

        let model = ModelRepository::new(&self.client)
            .create(&payload)
            .await
            .map_err(|err| log_failure("create model", err))?;

        tracing::info!("Created model {} ({})", model.name, model.id);
        self.invalidate(EntityKind::Model);

        Ok(model)
    }

    /// Replaces a model's fields
    pub async fn update_model(&self, id: i64, input: &ModelInput) -> Result<VehicleModel, Error> {
        let payload = input.validate()?;

        let model = ModelRepository::new(&self.client)
            .update(id, &payload)
            .await
            .map_err(|err| log_failure("update model", err))?
            .ok_or(Error::NotFound {
                entity: EntityKind::Model,
                id,
            })?;

        tracing::info!("Updated model {}", id);
        self.invalidate(EntityKind::Model);

        Ok(model)
    }

    /// Deletes a model after the user confirms
    pub async fn delete_model(
        &self,
        id: i64,
        confirm: &impl Confirm,
    ) -> Result<MutationOutcome<i64>, Error> {
        if !confirm.confirm(DELETE_MODEL_CONFIRMATION) {
            tracing::debug!("Deletion of model {} declined", id);
            return Ok(MutationOutcome::Declined);
        }

        ModelRepository::new(&self.client)
            .delete(id)
            .await
            .map_err(|err| log_failure("delete model", err))?;

        tracing::info!("Deleted model {}", id);
        self.invalidate(EntityKind::Model);

        Ok(MutationOutcome::Performed(id))
    }

    /// Model rows embed the make name, so make mutations invalidate both caches.
    fn invalidate(&self, entity: EntityKind) {
        match entity {
            EntityKind::Make => {
                self.makes.invalidate();
                self.models.invalidate();
            }
            EntityKind::Model => self.models.invalidate(),
        }
    }
}

fn log_failure<E: std::fmt::Display>(operation: &str, err: E) -> E {
    tracing::error!("Failed to {}: {}", operation, err);
    err
}
