//! People and the relationship groups they are filed under.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RapportError, RapportResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    /// A [`RelationshipGroup`] value, or free text for custom groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Mirrored into a yearly birthday event by [`crate::birthday`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Contact {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            relationship: None,
            phone: None,
            email: None,
            birthday: None,
            notes: None,
            avatar_url: None,
        }
    }

    pub fn validate(&self) -> RapportResult<()> {
        if self.name.trim().is_empty() {
            return Err(RapportError::validation("name", "must not be empty"));
        }
        Ok(())
    }

    pub fn group_label(&self) -> String {
        group_label(self.relationship.as_deref())
    }

    pub fn group_icon(&self) -> &'static str {
        group_icon(self.relationship.as_deref())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Predefined relationship groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipGroup {
    Family,
    Friend,
    Colleague,
    Classmate,
    Relative,
    Business,
    Other,
}

impl RelationshipGroup {
    pub const ALL: [RelationshipGroup; 7] = [
        RelationshipGroup::Family,
        RelationshipGroup::Friend,
        RelationshipGroup::Colleague,
        RelationshipGroup::Classmate,
        RelationshipGroup::Relative,
        RelationshipGroup::Business,
        RelationshipGroup::Other,
    ];

    pub fn from_value(value: &str) -> Option<Self> {
        RelationshipGroup::ALL
            .into_iter()
            .find(|g| g.value() == value)
    }

    pub fn value(&self) -> &'static str {
        match self {
            RelationshipGroup::Family => "family",
            RelationshipGroup::Friend => "friend",
            RelationshipGroup::Colleague => "colleague",
            RelationshipGroup::Classmate => "classmate",
            RelationshipGroup::Relative => "relative",
            RelationshipGroup::Business => "business",
            RelationshipGroup::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RelationshipGroup::Family => "Family",
            RelationshipGroup::Friend => "Friends",
            RelationshipGroup::Colleague => "Colleagues",
            RelationshipGroup::Classmate => "Classmates",
            RelationshipGroup::Relative => "Relatives",
            RelationshipGroup::Business => "Business",
            RelationshipGroup::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RelationshipGroup::Family => "👨‍👩‍👧‍👦",
            RelationshipGroup::Friend => "🤝",
            RelationshipGroup::Colleague => "💼",
            RelationshipGroup::Classmate => "🎓",
            RelationshipGroup::Relative => "👪",
            RelationshipGroup::Business => "🤵",
            RelationshipGroup::Other => "📋",
        }
    }
}

/// Display label for a stored relationship value.
///
/// Custom values are shown as-is.
pub fn group_label(value: Option<&str>) -> String {
    match value {
        None => "Ungrouped".to_string(),
        Some(v) => RelationshipGroup::from_value(v)
            .map(|g| g.label().to_string())
            .unwrap_or_else(|| v.to_string()),
    }
}

pub fn group_icon(value: Option<&str>) -> &'static str {
    match value {
        None => "📌",
        Some(v) => RelationshipGroup::from_value(v)
            .unwrap_or(RelationshipGroup::Other)
            .icon(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_label_falls_back_for_unknown_and_missing() {
        assert_eq!(group_label(Some("family")), "Family");
        assert_eq!(group_label(Some("book club")), "book club");
        assert_eq!(group_label(None), "Ungrouped");
    }

    #[test]
    fn test_group_icon_falls_back_for_unknown_and_missing() {
        assert_eq!(group_icon(Some("colleague")), "💼");
        assert_eq!(group_icon(Some("book club")), "📋");
        assert_eq!(group_icon(None), "📌");
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert!(Contact::new(" ").validate().is_err());
        assert!(Contact::new("Mina").validate().is_ok());
    }
}
