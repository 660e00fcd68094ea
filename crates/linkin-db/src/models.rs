/// Database row types that have no API counterpart.
/// Page, link and social rows map straight onto the `linkin-types` models.

pub struct UserRow {
    pub id: String,
    pub username: String,
    /// Plaintext or a hash, depending on how the server authenticates.
    pub password: String,
    pub created_at: String,
}
