use anyhow::Result;
use linkin_types::models::PageSettings;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            username    TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS pagedata (
            id                          INTEGER PRIMARY KEY,
            handlerText                 TEXT NOT NULL,
            handlerDescription          TEXT NOT NULL DEFAULT '',
            avatarUrl                   TEXT NOT NULL DEFAULT '',
            bgColor                     TEXT NOT NULL,
            accentColor                 TEXT NOT NULL,
            handlerFontColor            TEXT NOT NULL,
            handlerDescriptionFontColor TEXT NOT NULL,
            fontFamily                  TEXT NOT NULL,
            footerEnabled               INTEGER NOT NULL DEFAULT 1,
            footerText                  TEXT NOT NULL DEFAULT '',
            footerTextColor             TEXT NOT NULL,
            created_at                  TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at                  TEXT
        );

        CREATE TABLE IF NOT EXISTS linkdata (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            url         TEXT NOT NULL,
            active      INTEGER NOT NULL DEFAULT 1,
            orderIndex  INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_linkdata_order
            ON linkdata(active, orderIndex);

        CREATE TABLE IF NOT EXISTS socialdata (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            platform    TEXT NOT NULL,
            url         TEXT NOT NULL,
            active      INTEGER NOT NULL DEFAULT 1,
            orderIndex  INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_socialdata_order
            ON socialdata(active, orderIndex);
        ",
    )?;

    // Seed the singleton settings row
    let page = PageSettings::default();
    conn.execute(
        "INSERT OR IGNORE INTO pagedata (
            id, handlerText, handlerDescription, avatarUrl, bgColor, accentColor,
            handlerFontColor, handlerDescriptionFontColor, fontFamily,
            footerEnabled, footerText, footerTextColor
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        rusqlite::params![
            page.id,
            page.handler_text,
            page.handler_description,
            page.avatar_url,
            page.bg_color,
            page.accent_color,
            page.handler_font_color,
            page.handler_description_font_color,
            page.font_family,
            page.footer_enabled,
            page.footer_text,
            page.footer_text_color,
        ],
    )?;

    info!("Database migrations complete");
    Ok(())
}
