use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaybeError {
    #[error("Missing attribute: '{name}'")]
    MissingAttribute { name: String },

    #[error("Missing key: {key}")]
    MissingKey { key: String },

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("'{type_name}' does not support {operation}")]
    TypeMismatch {
        type_name: String,
        operation: &'static str,
    },

    #[error("'{type_name}' object is not callable")]
    NotCallable { type_name: String },

    #[error("Invalid literal for {target}: {literal}")]
    InvalidLiteral { target: &'static str, literal: String },

    #[error("Cannot allocate {requested} bytes")]
    AllocationFailed { requested: usize },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("{message}")]
    Failed { message: String },

    #[error(transparent)]
    Domain(Box<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 可被視為「值不存在」的失敗種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceKind {
    MissingAttribute,
    MissingKey,
    IndexOutOfRange,
    TypeMismatch,
    NotCallable,
}

impl AbsenceKind {
    pub const ALL: [AbsenceKind; 5] = [
        AbsenceKind::MissingAttribute,
        AbsenceKind::MissingKey,
        AbsenceKind::IndexOutOfRange,
        AbsenceKind::TypeMismatch,
        AbsenceKind::NotCallable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AbsenceKind::MissingAttribute => "missing_attribute",
            AbsenceKind::MissingKey => "missing_key",
            AbsenceKind::IndexOutOfRange => "index_out_of_range",
            AbsenceKind::TypeMismatch => "type_mismatch",
            AbsenceKind::NotCallable => "not_callable",
        }
    }
}

impl fmt::Display for AbsenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MaybeError {
    pub fn failed(message: impl Into<String>) -> Self {
        MaybeError::Failed {
            message: message.into(),
        }
    }

    pub fn domain<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        MaybeError::Domain(Box::new(err))
    }

    pub fn missing_attribute(name: impl Into<String>) -> Self {
        MaybeError::MissingAttribute { name: name.into() }
    }

    pub fn missing_key(key: impl fmt::Display) -> Self {
        MaybeError::MissingKey {
            key: key.to_string(),
        }
    }

    pub fn type_mismatch(type_name: impl Into<String>, operation: &'static str) -> Self {
        MaybeError::TypeMismatch {
            type_name: type_name.into(),
            operation,
        }
    }

    pub fn not_callable(type_name: impl Into<String>) -> Self {
        MaybeError::NotCallable {
            type_name: type_name.into(),
        }
    }

    /// 回傳此錯誤對應的缺值種類；與缺值無關的錯誤回傳 `None`
    pub fn absence_kind(&self) -> Option<AbsenceKind> {
        match self {
            MaybeError::MissingAttribute { .. } => Some(AbsenceKind::MissingAttribute),
            MaybeError::MissingKey { .. } => Some(AbsenceKind::MissingKey),
            MaybeError::IndexOutOfRange { .. } => Some(AbsenceKind::IndexOutOfRange),
            MaybeError::TypeMismatch { .. } => Some(AbsenceKind::TypeMismatch),
            MaybeError::NotCallable { .. } => Some(AbsenceKind::NotCallable),
            _ => None,
        }
    }

    pub fn is_absence(&self) -> bool {
        self.absence_kind().is_some()
    }
}

pub type Result<T> = std::result::Result<T, MaybeError>;
