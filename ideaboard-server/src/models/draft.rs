//! Validated idea input - title, description, and the draft that pairs them

use super::{CreateIdeaRequest, ValidationError};

/// Maximum length for idea titles (matches the `VARCHAR(255)` column)
pub const MAX_TITLE_LEN: usize = 255;

/// Validated idea title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaTitle(String);

impl IdeaTitle {
    /// Create a new idea title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 255 characters
    /// - No NUL characters
    ///
    /// # Example
    /// ```
    /// use ideaboard_server::models::IdeaTitle;
    ///
    /// assert!(IdeaTitle::new("Rooftop garden").is_ok());
    /// assert!(IdeaTitle::new("").is_err());
    /// assert!(IdeaTitle::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        if trimmed.contains('\0') {
            return Err(ValidationError::NulCharacter { field: "title" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IdeaTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated idea description (non-empty after trimming, no NUL characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDescription(String);

impl IdeaDescription {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "description",
            });
        }

        if trimmed.contains('\0') {
            return Err(ValidationError::NulCharacter {
                field: "description",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IdeaDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated title/description pair, ready to hand to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: IdeaTitle,
    pub description: IdeaDescription,
}

impl IdeaDraft {
    /// Validate both fields. The title is checked first.
    pub fn new(title: &str, description: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: IdeaTitle::new(title)?,
            description: IdeaDescription::new(description)?,
        })
    }
}

impl TryFrom<CreateIdeaRequest> for IdeaDraft {
    type Error = ValidationError;

    fn try_from(req: CreateIdeaRequest) -> Result<Self, Self::Error> {
        Self::new(&req.title, &req.description)
    }
}
