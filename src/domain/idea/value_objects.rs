// src/domain/idea/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MAX_LENGTH: usize = 120;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdeaId(pub i64);

impl IdeaId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("idea id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<IdeaId> for i64 {
    fn from(value: IdeaId) -> Self {
        value.0
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaTitle(String);

impl IdeaTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > TITLE_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_LENGTH} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdeaTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IdeaTitle> for String {
    fn from(value: IdeaTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDescription(String);

impl IdeaDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "description must be at most {DESCRIPTION_MAX_LENGTH} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdeaDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IdeaDescription> for String {
    fn from(value: IdeaDescription) -> Self {
        value.0
    }
}
