use std::fmt;

/// One row of a client lookup: the client joined with at most one of its phones.
///
/// A client with several phones shows up once per phone; a client without
/// phones shows up once with `phone` set to `None`.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl fmt::Display for ClientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} | {} | {}",
            self.id,
            self.first_name,
            self.last_name,
            self.email,
            self.phone.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_missing_phone() {
        let row = ClientRow {
            id: 7,
            first_name: "Petr".into(),
            last_name: "Ivanov".into(),
            email: "ivan@example.com".into(),
            phone: None,
        };
        assert_eq!(row.to_string(), "7 | Petr Ivanov | ivan@example.com | -");

        let row = ClientRow {
            phone: Some("+79161112233".into()),
            ..row
        };
        assert_eq!(
            row.to_string(),
            "7 | Petr Ivanov | ivan@example.com | +79161112233"
        );
    }
}
