/// A contact-form submission as stored in SQLite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
}
