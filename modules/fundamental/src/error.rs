use crate::{graph::GraphError, serializer::Kind, validation::ValidationError};
use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use heroes_common::error::ErrorInformation;
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{kind} {id} not found")]
    NotFound { kind: Kind, id: i32 },
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Database(anyhow::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl Error {
    pub fn not_found(kind: Kind, id: i32) -> Self {
        Self::NotFound { kind, id }
    }
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Self::Database(value.into())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Graph(_) | Self::Database(_) | Self::Any(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let info = match self {
            Self::Validation(err) => {
                ErrorInformation::new("ValidationError", err).with_details(err.field)
            }
            Self::NotFound { .. } => ErrorInformation::new("NotFound", self),
            Self::Graph(err) => ErrorInformation::new("Inconsistent data", err),
            Self::Database(err) => ErrorInformation::new("Database error", err),
            Self::Any(err) => ErrorInformation::new("System unknown", err),
        };

        HttpResponse::build(self.status_code()).json(info)
    }
}
