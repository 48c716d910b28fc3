use std::fmt;

use sea_orm::DbErr;

/// The three record kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Venue,
    Artist,
    Show,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Venue => f.write_str("Venue"),
            EntityKind::Artist => f.write_str("Artist"),
            EntityKind::Show => f.write_str("Show"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("Failed to write {kind}: {source}")]
    Write {
        kind: EntityKind,
        #[source]
        source: DbErr,
    },
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl BookingError {
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn write(kind: EntityKind, source: DbErr) -> Self {
        Self::Write { kind, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// User-visible outcome of a single write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub success: bool,
    pub message: String,
    pub id: Option<i64>,
}

impl Notice {
    /// `label` is what the user called the record, usually its name.
    pub fn listed(kind: EntityKind, label: Option<&str>, id: i64) -> Self {
        let message = match label {
            Some(label) => format!("{} {} was successfully listed!", kind, label),
            None => format!("{} was successfully listed!", kind),
        };
        Self {
            success: true,
            message,
            id: Some(id),
        }
    }

    pub fn deleted(kind: EntityKind, id: i64) -> Self {
        Self {
            success: true,
            message: format!("{} {} was deleted.", kind, id),
            id: Some(id),
        }
    }

    pub fn delete_failed(kind: EntityKind, id: i64, err: &BookingError) -> Self {
        log::error!("{} {} delete failed: {}", kind, id, err);
        let message = if err.is_not_found() {
            format!("{} {} does not exist.", kind, id)
        } else {
            format!("An error occurred. {} {} could not be deleted.", kind, id)
        };
        Self {
            success: false,
            message,
            id: None,
        }
    }

    pub fn failed(kind: EntityKind, label: Option<&str>, err: &BookingError) -> Self {
        log::error!("{} write failed: {}", kind, err);
        let message = match (label, err) {
            (_, BookingError::Validation { .. }) => {
                format!("{} could not be listed: {}", kind, err)
            }
            (Some(label), _) => {
                format!("An error occurred. {} {} could not be listed.", kind, label)
            }
            (None, _) => format!("An error occurred. {} could not be listed.", kind),
        };
        Self {
            success: false,
            message,
            id: None,
        }
    }
}
