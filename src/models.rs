// Data structures (Post, request payloads, query parameters)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// Post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

// Request Types

/// Body of `POST /api/posts`.
///
/// Both fields are optional at the wire level so that a missing key reaches
/// the handler and is reported as a validation error instead of a body
/// deserialization failure. Unknown keys (including `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `PUT /api/posts/{id}`. Only the supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
}

// Query Types

/// Query string of `GET /api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListQuery {
    /// Validates the raw parameters.
    ///
    /// The sort field is checked before the direction, and the direction is
    /// checked even when no sort field was requested.
    pub fn parse(&self) -> Result<(Option<SortField>, SortDirection), ApiError> {
        let field = match self.sort.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<SortField>()?),
        };
        let direction = match self.direction.as_deref() {
            None => SortDirection::default(),
            Some(raw) => raw.parse::<SortDirection>()?,
        };
        Ok((field, direction))
    }
}

/// Query string of `GET /api/posts/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchQuery {
    /// Lower-cased title needle, `None` when absent or empty.
    pub fn title_needle(&self) -> Option<String> {
        normalize(self.title.as_deref())
    }

    /// Lower-cased content needle, `None` when absent or empty.
    pub fn content_needle(&self) -> Option<String> {
        normalize(self.content.as_deref())
    }
}

fn normalize(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

// Sorting

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    /// Case-folded sort key of `post` for this field.
    pub fn key(self, post: &Post) -> String {
        match self {
            SortField::Title => post.title.to_lowercase(),
            SortField::Content => post.content.to_lowercase(),
        }
    }
}

impl FromStr for SortField {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            _ => Err(ApiError::InvalidParameter(
                "Invalid sort field. It should be 'title' or 'content'.".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ApiError::InvalidParameter(
                "Invalid direction. It should be 'asc' or 'desc'.".to_string(),
            )),
        }
    }
}

// Response Types

/// JSON body of every 400/500 reply: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}
