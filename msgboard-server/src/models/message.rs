//! Message input validation

use super::ValidationError;
use crate::db::schema::AUTHOR_MAX_LEN;

/// Validated message body. Never empty, whitespace-only or containing NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create new message content.
    ///
    /// # Example
    /// ```
    /// use msgboard_server::models::MessageContent;
    ///
    /// assert!(MessageContent::new("hello").is_ok());
    /// assert!(MessageContent::new("").is_err());
    /// assert!(MessageContent::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }
        if s.contains('\0') {
            return Err(ValidationError::ContainsNul { field: "content" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Display name of a message author, at most 100 characters, without NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > AUTHOR_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "author",
                max: AUTHOR_MAX_LEN,
            });
        }
        if s.contains('\0') {
            return Err(ValidationError::ContainsNul { field: "author" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// A message ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub author: Option<AuthorName>,
    pub content: MessageContent,
}

impl NewMessage {
    pub fn new(author: Option<String>, content: &str) -> Result<Self, ValidationError> {
        let content = MessageContent::new(content)?;
        let author = author.as_deref().map(AuthorName::new).transpose()?;
        Ok(Self { author, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_keeps_surrounding_whitespace() {
        let content = MessageContent::new("  hi  ").unwrap();
        assert_eq!(content.as_str(), "  hi  ");
    }

    #[test]
    fn empty_content_rejected() {
        assert_eq!(
            MessageContent::new("\n\t ").unwrap_err(),
            ValidationError::Empty { field: "content" }
        );
    }

    #[test]
    fn author_limit_counts_chars() {
        let at_limit = "é".repeat(AUTHOR_MAX_LEN);
        assert!(AuthorName::new(&at_limit).is_ok());

        let over = "a".repeat(AUTHOR_MAX_LEN + 1);
        assert_eq!(
            AuthorName::new(&over).unwrap_err(),
            ValidationError::TooLong {
                field: "author",
                max: AUTHOR_MAX_LEN
            }
        );
    }

    #[test]
    fn nul_rejected_in_content_and_author() {
        assert_eq!(
            MessageContent::new("a\u{0}b").unwrap_err(),
            ValidationError::ContainsNul { field: "content" }
        );
        assert_eq!(
            AuthorName::new("An\u{0}a").unwrap_err(),
            ValidationError::ContainsNul { field: "author" }
        );
        assert_eq!(
            NewMessage::new(Some("\u{0}".into()), "hi").unwrap_err(),
            ValidationError::ContainsNul { field: "author" }
        );
    }

    #[test]
    fn new_message_without_author() {
        let msg = NewMessage::new(None, "hello").unwrap();
        assert!(msg.author.is_none());
        assert_eq!(msg.content.into_string(), "hello");
    }

    #[test]
    fn content_checked_before_author() {
        let err = NewMessage::new(Some("x".repeat(500)), "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "content" });
    }
}
