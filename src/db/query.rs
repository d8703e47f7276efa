use sqlx::{Postgres, QueryBuilder};

const FIND_CLIENTS: &str = "SELECT c.id, c.first_name, c.last_name, c.email, p.phone \
     FROM clients c LEFT JOIN phones p ON c.id = p.client_id";

/// Columns a client lookup can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl FilterField {
    pub fn column(self) -> &'static str {
        match self {
            FilterField::FirstName => "c.first_name",
            FilterField::LastName => "c.last_name",
            FilterField::Email => "c.email",
            FilterField::Phone => "p.phone",
        }
    }
}

/// Optional equality filters for `find_client`. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// The supplied filters, in column order.
    pub fn predicates(&self) -> Vec<(FilterField, &str)> {
        [
            (FilterField::FirstName, &self.first_name),
            (FilterField::LastName, &self.last_name),
            (FilterField::Email, &self.email),
            (FilterField::Phone, &self.phone),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Columns of `clients` that `update_client` may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    FirstName,
    LastName,
    Email,
}

impl UpdateField {
    pub fn column(self) -> &'static str {
        match self {
            UpdateField::FirstName => "first_name",
            UpdateField::LastName => "last_name",
            UpdateField::Email => "email",
        }
    }
}

/// Field changes for `update_client`. `None` leaves the column untouched;
/// `Some` writes the value as given, including an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl ClientUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }

    pub fn assignments(&self) -> Vec<(UpdateField, &str)> {
        [
            (UpdateField::FirstName, &self.first_name),
            (UpdateField::LastName, &self.last_name),
            (UpdateField::Email, &self.email),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Build the left-joined client lookup with one bound condition per filter.
pub fn find_query(filter: &ClientFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new(FIND_CLIENTS);

    for (i, (field, value)) in filter.predicates().into_iter().enumerate() {
        query.push(if i == 0 { " WHERE " } else { " AND " });
        query.push(field.column()).push(" = ").push_bind(value);
    }

    query
}

/// Build a single UPDATE for every supplied field, or `None` when there is
/// nothing to change.
pub fn update_query(client_id: i32, update: &ClientUpdate) -> Option<QueryBuilder<'_, Postgres>> {
    let assignments = update.assignments();
    if assignments.is_empty() {
        return None;
    }

    let mut query = QueryBuilder::new("UPDATE clients SET ");
    for (i, (field, value)) in assignments.into_iter().enumerate() {
        if i > 0 {
            query.push(", ");
        }
        query.push(field.column()).push(" = ").push_bind(value);
    }
    query.push(" WHERE id = ").push_bind(client_id);

    Some(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_selects_everything() {
        let filter = ClientFilter::new();
        let query = find_query(&filter);
        assert_eq!(query.sql(), FIND_CLIENTS);
    }

    #[test]
    fn single_filter_adds_where_clause() {
        let filter = ClientFilter::new().first_name("Petr");
        let query = find_query(&filter);
        assert_eq!(
            query.sql(),
            format!("{FIND_CLIENTS} WHERE c.first_name = $1")
        );
    }

    #[test]
    fn filters_are_joined_with_and_in_column_order() {
        let filter = ClientFilter::new()
            .phone("+79161234567")
            .email("ivan@example.com")
            .last_name("Ivanov");
        let query = find_query(&filter);
        assert_eq!(
            query.sql(),
            format!(
                "{FIND_CLIENTS} WHERE c.last_name = $1 AND c.email = $2 AND p.phone = $3"
            )
        );
    }

    #[test]
    fn predicates_keep_values() {
        let filter = ClientFilter::new().email("a@b.c").phone("+1");
        assert_eq!(
            filter.predicates(),
            vec![(FilterField::Email, "a@b.c"), (FilterField::Phone, "+1")]
        );
    }

    #[test]
    fn empty_string_is_still_a_filter() {
        let filter = ClientFilter::new().first_name("");
        assert_eq!(filter.predicates(), vec![(FilterField::FirstName, "")]);
    }

    #[test]
    fn empty_update_builds_nothing() {
        let update = ClientUpdate::new();
        assert!(update.is_empty());
        assert!(update_query(1, &update).is_none());
    }

    #[test]
    fn update_sets_only_supplied_fields() {
        let update = ClientUpdate::new().last_name("Petrov");
        let query = update_query(3, &update).unwrap();
        assert_eq!(query.sql(), "UPDATE clients SET last_name = $1 WHERE id = $2");
    }

    #[test]
    fn update_sets_all_fields_in_one_statement() {
        let update = ClientUpdate::new()
            .email("petr@example.com")
            .first_name("Petr")
            .last_name("Petrov");
        let query = update_query(3, &update).unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE clients SET first_name = $1, last_name = $2, email = $3 WHERE id = $4"
        );
    }

    #[test]
    fn empty_string_update_is_written() {
        let update = ClientUpdate::new().first_name("");
        assert!(!update.is_empty());
        assert_eq!(update.assignments(), vec![(UpdateField::FirstName, "")]);
    }
}
