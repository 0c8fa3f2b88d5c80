use std::fmt;
use thiserror::Error;

/// Which upstream lookup a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Tasks,
    Owner,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Tasks => write!(f, "TODO list"),
            Resource::Owner => write!(f, "employee details"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("TODO list unavailable (HTTP {status})")]
    TasksUnavailable { status: u16 },

    #[error("Employee details unavailable (HTTP {status})")]
    OwnerUnavailable { status: u16 },

    #[error("Malformed {resource} response: {reason}")]
    MalformedResponse { resource: Resource, reason: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request error while fetching {resource}")]
    Request {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The lookup that failed, if the failure is tied to one.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            FetchError::TasksUnavailable { .. } => Some(Resource::Tasks),
            FetchError::OwnerUnavailable { .. } => Some(Resource::Owner),
            FetchError::MalformedResponse { resource, .. } => Some(*resource),
            FetchError::Request { resource, .. } => Some(*resource),
            FetchError::InvalidBaseUrl(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
