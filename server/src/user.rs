use serde::Serialize;

/// An ID in the database.
pub type Id = i64;

/// A single registered user.
#[derive(Clone, Debug, Serialize)]
pub struct User {
    /// The ID of the user.
    pub id: Id,

    /// The unique email used to log in.
    pub email: String,

    /// The argon2 PHC-string hash of the password. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// The first name, if the user has set one.
    pub first_name: Option<String>,

    /// The last name, if the user has set one.
    pub last_name: Option<String>,

    /// When the user registered, as unix seconds.
    pub created_at: i64,
}

impl User {
    /// The name shown next to reviews: "First Last" when set, otherwise
    /// the email.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                format!("{} {}", first, last)
            }
            (Some(first), _) if !first.is_empty() => first.to_owned(),
            _ => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::User;

    fn user(first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: 1,
            email: "cook@example.com".into(),
            password_hash: String::new(),
            first_name: first.map(Into::into),
            last_name: last.map(Into::into),
            created_at: 0,
        }
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(user(None, None).display_name(), "cook@example.com");
        assert_eq!(user(Some(""), Some("")).display_name(), "cook@example.com");
        assert_eq!(user(Some("Ada"), None).display_name(), "Ada");
        assert_eq!(user(Some("Ada"), Some("L")).display_name(), "Ada L");
    }
}
