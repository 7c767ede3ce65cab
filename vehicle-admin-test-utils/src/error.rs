use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    AppError(#[from] vehicle_admin::error::Error),
    #[error(transparent)]
    ConfigError(#[from] vehicle_admin::error::config::ConfigError),
    #[error(transparent)]
    BackendError(#[from] vehicle_admin::error::backend::BackendError),
}
