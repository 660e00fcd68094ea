use crate::models::UserRow;
use crate::Database;
use anyhow::Result;
use linkin_types::models::{LinkEntry, PAGE_ID, PageSettings, PageUpdate, SocialEntry};
use rusqlite::{Connection, Row};

impl Database {
    // -- Page settings --

    /// Returns `None` when the singleton row is missing; callers apply defaults.
    pub fn get_page(&self) -> Result<Option<PageSettings>> {
        self.with_conn(query_page)
    }

    /// Overwrites the four editable columns and stamps `updated_at`.
    /// Everything else on the row is left alone.
    pub fn update_page(&self, update: &PageUpdate) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE pagedata SET
                    handlerText = ?1,
                    handlerDescription = ?2,
                    bgColor = ?3,
                    accentColor = ?4,
                    updated_at = CURRENT_TIMESTAMP
                 WHERE id = ?5",
                rusqlite::params![
                    update.handler_text,
                    update.handler_description,
                    update.bg_color,
                    update.accent_color,
                    PAGE_ID,
                ],
            )?;
            Ok(())
        })
    }

    // -- Links --

    /// Active links, lowest `orderIndex` first.
    pub fn get_links(&self) -> Result<Vec<LinkEntry>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, url, active, orderIndex FROM linkdata
                 WHERE active = 1
                 ORDER BY orderIndex ASC, id ASC",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(LinkEntry {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        url: row.get(2)?,
                        active: row.get(3)?,
                        order_index: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    pub fn insert_link(&self, title: &str, url: &str, active: bool, order_index: i64) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO linkdata (title, url, active, orderIndex) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![title, url, active, order_index],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    // -- Socials --

    /// Active social entries, lowest `orderIndex` first.
    pub fn get_socials(&self) -> Result<Vec<SocialEntry>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, platform, url, active, orderIndex FROM socialdata
                 WHERE active = 1
                 ORDER BY orderIndex ASC, id ASC",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(SocialEntry {
                        id: row.get(0)?,
                        platform: row.get(1)?,
                        url: row.get(2)?,
                        active: row.get(3)?,
                        order_index: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    pub fn insert_social(&self, platform: &str, url: &str, active: bool, order_index: i64) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO socialdata (platform, url, active, orderIndex) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![platform, url, active, order_index],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    // -- Users --

    pub fn create_user(&self, id: &str, username: &str, password: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (id, username, password) VALUES (?1, ?2, ?3)",
                (id, username, password),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, username, password, created_at FROM users WHERE username = ?1",
                [username],
                user_from_row,
            )
            .optional()
        })
    }

    /// Exact match on both columns. Only ever matches when passwords are
    /// stored in plaintext.
    pub fn find_user_by_credentials(&self, username: &str, password: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, username, password, created_at FROM users
                 WHERE username = ?1 AND password = ?2",
                [username, password],
                user_from_row,
            )
            .optional()
        })
    }

    pub fn count_users(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            Ok(count as u64)
        })
    }
}

fn query_page(conn: &Connection) -> Result<Option<PageSettings>> {
    let mut stmt = conn.prepare(
        "SELECT id, handlerText, handlerDescription, avatarUrl, bgColor, accentColor,
                handlerFontColor, handlerDescriptionFontColor, fontFamily,
                footerEnabled, footerText, footerTextColor, created_at, updated_at
         FROM pagedata WHERE id = ?1",
    )?;

    let page = stmt
        .query_row([PAGE_ID], |row| {
            Ok(PageSettings {
                id: row.get(0)?,
                handler_text: row.get(1)?,
                handler_description: row.get(2)?,
                avatar_url: row.get(3)?,
                bg_color: row.get(4)?,
                accent_color: row.get(5)?,
                handler_font_color: row.get(6)?,
                handler_description_font_color: row.get(7)?,
                font_family: row.get(8)?,
                footer_enabled: row.get(9)?,
                footer_text: row.get(10)?,
                footer_text_color: row.get(11)?,
                created_at: row.get(12)?,
                updated_at: row.get(13)?,
            })
        })
        .optional()?;

    Ok(page)
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn migrations_seed_default_page() {
        let db = db();
        let page = db.get_page().unwrap().expect("seeded row");
        assert_eq!(page.id, PAGE_ID);
        assert_eq!(page.handler_text, PageSettings::default().handler_text);
        assert!(page.created_at.is_some());
        assert!(page.updated_at.is_none());
    }

    #[test]
    fn missing_page_row_is_none() {
        let db = db();
        db.with_conn_mut(|conn| {
            conn.execute("DELETE FROM pagedata", [])?;
            Ok(())
        })
        .unwrap();
        assert!(db.get_page().unwrap().is_none());

        // Updating a missing row is a silent no-op
        let update = PageUpdate {
            handler_text: "B".into(),
            handler_description: "d".into(),
            bg_color: "#000".into(),
            accent_color: "#111".into(),
        };
        db.update_page(&update).unwrap();
        assert!(db.get_page().unwrap().is_none());
    }

    #[test]
    fn update_leaves_other_columns_alone() {
        let db = db();
        db.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE pagedata SET handlerText = 'A', bgColor = '#fff', avatarUrl = '/me.png' WHERE id = 1",
                [],
            )?;
            Ok(())
        })
        .unwrap();

        let update = PageUpdate {
            handler_text: "B".into(),
            handler_description: "d".into(),
            bg_color: "#000".into(),
            accent_color: "#111".into(),
        };
        db.update_page(&update).unwrap();

        let page = db.get_page().unwrap().unwrap();
        assert_eq!(page.handler_text, "B");
        assert_eq!(page.handler_description, "d");
        assert_eq!(page.bg_color, "#000");
        assert_eq!(page.accent_color, "#111");
        assert_eq!(page.avatar_url, "/me.png");
        assert_eq!(page.font_family, "Arial");
        assert!(page.updated_at.is_some());
    }

    #[test]
    fn links_are_active_only_and_ordered() {
        let db = db();
        db.insert_link("third", "https://c.example", true, 30).unwrap();
        db.insert_link("hidden", "https://h.example", false, 0).unwrap();
        db.insert_link("first", "https://a.example", true, 10).unwrap();
        db.insert_link("second", "https://b.example", true, 20).unwrap();

        let links = db.get_links().unwrap();
        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
        assert!(links.iter().all(|l| l.active));
    }

    #[test]
    fn socials_are_active_only_and_ordered() {
        let db = db();
        db.insert_social("youtube", "https://youtube.com/@me", true, 2).unwrap();
        db.insert_social("github", "https://github.com/me", true, 1).unwrap();
        db.insert_social("myspace", "https://myspace.com/me", false, 0).unwrap();

        let socials = db.get_socials().unwrap();
        let platforms: Vec<&str> = socials.iter().map(|s| s.platform.as_str()).collect();
        assert_eq!(platforms, ["github", "youtube"]);
    }

    #[test]
    fn credential_lookup_is_exact() {
        let db = db();
        assert_eq!(db.count_users().unwrap(), 0);
        db.create_user("u1", "admin", "hunter2").unwrap();
        assert_eq!(db.count_users().unwrap(), 1);

        assert!(db.find_user_by_credentials("admin", "hunter2").unwrap().is_some());
        assert!(db.find_user_by_credentials("admin", "Hunter2").unwrap().is_none());
        assert!(db.find_user_by_credentials("Admin", "hunter2").unwrap().is_none());

        let user = db.get_user_by_username("admin").unwrap().unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.password, "hunter2");
    }
}
