use linkin_types::models::{LinkEntry, PageSettings, SocialEntry};

use super::Document;

pub fn home(page: &PageSettings, links: &[LinkEntry], socials: &[SocialEntry]) -> Document {
    let meta = format!(
        r#"
    <meta name="description" content="{desc}">
    <meta property="og:title" content="{name}">
    <meta property="og:description" content="{desc}">
    <meta property="og:type" content="website">{image}"#,
        name = page.handler_text,
        desc = page.handler_description,
        image = if page.avatar_url.is_empty() {
            String::new()
        } else {
            format!("\n    <meta property=\"og:image\" content=\"{}\">", page.avatar_url)
        },
    );

    let avatar = if page.avatar_url.is_empty() {
        r#"<div class="avatar">🌟</div>"#.to_string()
    } else {
        format!(
            r#"<div class="avatar"><img src="{}" alt="{}"></div>"#,
            page.avatar_url, page.handler_text
        )
    };

    let link_items: String = links
        .iter()
        .map(|link| {
            format!(
                "\n        <a href=\"{}\" class=\"link-item\" target=\"_blank\" rel=\"noopener\">{}</a>",
                link.url, link.title
            )
        })
        .collect();

    let social_row = if socials.is_empty() {
        String::new()
    } else {
        let items: String = socials
            .iter()
            .map(|social| {
                format!(
                    "\n            <a href=\"{}\" class=\"social-item\" target=\"_blank\" rel=\"noopener\" title=\"{}\">{}</a>",
                    social.url,
                    social.platform,
                    initial(&social.platform)
                )
            })
            .collect();
        format!("\n        <div class=\"social-links\">{}\n        </div>", items)
    };

    let body = format!(
        r#"    <div class="container">
        {avatar}
        <div class="handler-text">{name}</div>
        <div class="handler-description">{desc}</div>{links}{socials}
        <div class="footer">{footer}</div>
    </div>
    <a href="/admin" class="admin-link" title="Admin Panel">⚙️</a>"#,
        avatar = avatar,
        name = page.handler_text,
        desc = page.handler_description,
        links = link_items,
        socials = social_row,
        footer = page.footer_text,
    );

    Document {
        title: format!("{} - Link Tree", page.handler_text),
        meta,
        style: home_style(page),
        body,
        script: format!(
            "        console.log('Links: {}, Social: {}');",
            links.len(),
            socials.len()
        ),
    }
}

/// Served when page data cannot be loaded.
pub fn home_fallback(error: &str) -> Document {
    Document {
        title: "Link Tree".into(),
        meta: String::new(),
        style: FALLBACK_STYLE.into(),
        body: format!(
            r#"    <div class="container">
        <h1>🌟 Link Tree</h1>
        <p>Welcome to my link tree</p>
        <div class="error">⚠️ Database connection error</div>
        <p>Please try again later or contact the administrator.</p>
        <button class="retry-btn" onclick="location.reload()">Retry</button>
        <p><a href="/admin">Admin Panel</a></p>
        <small>Error: {}</small>
    </div>"#,
            error
        ),
        script: String::new(),
    }
}

/// First character of the platform name, uppercased.
fn initial(platform: &str) -> String {
    platform
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn home_style(page: &PageSettings) -> String {
    format!(
        r#"        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: '{font}', sans-serif;
            background: {bg};
            background: linear-gradient(135deg, {bg} 0%, {accent}20 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            color: {fg};
            padding: 20px;
        }}
        .container {{
            background: rgba(255, 255, 255, 0.95);
            border-radius: 20px;
            padding: 40px;
            max-width: 400px;
            width: 100%;
            text-align: center;
            box-shadow: 0 20px 40px rgba(0,0,0,0.1);
        }}
        .avatar {{
            width: 120px;
            height: 120px;
            border-radius: 50%;
            margin: 0 auto 20px;
            background: linear-gradient(45deg, {accent} 0%, {accent}80 100%);
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 50px;
            overflow: hidden;
        }}
        .avatar img {{ width: 100%; height: 100%; object-fit: cover; }}
        .handler-text {{ font-size: 28px; font-weight: bold; margin: 20px 0 10px; color: {fg}; }}
        .handler-description {{ font-size: 16px; color: {desc_fg}; margin: 10px 0 30px; line-height: 1.5; }}
        .link-item {{
            display: block;
            background: #f8f9fa;
            border: 2px solid {accent}30;
            border-radius: 15px;
            padding: 15px 20px;
            margin: 12px 0;
            text-decoration: none;
            color: {fg};
            font-weight: 500;
            transition: all 0.3s ease;
        }}
        .link-item:hover {{ transform: translateY(-2px); background: {accent}10; border-color: {accent}; }}
        .social-links {{ display: flex; justify-content: center; gap: 15px; margin: 20px 0; }}
        .social-item {{
            display: flex;
            align-items: center;
            justify-content: center;
            width: 50px;
            height: 50px;
            background: {accent}20;
            border-radius: 50%;
            text-decoration: none;
            color: {accent};
            font-weight: bold;
        }}
        .social-item:hover {{ background: {accent}; color: white; }}
        .footer {{ margin-top: 30px; color: {footer_fg}; font-size: 14px; display: {footer_display}; }}
        .admin-link {{
            position: fixed;
            bottom: 20px;
            right: 20px;
            background: {accent};
            color: white;
            width: 50px;
            height: 50px;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            text-decoration: none;
            font-size: 20px;
        }}"#,
        font = page.font_family,
        bg = page.bg_color,
        accent = page.accent_color,
        fg = page.handler_font_color,
        desc_fg = page.handler_description_font_color,
        footer_fg = page.footer_text_color,
        footer_display = if page.footer_enabled { "block" } else { "none" },
    )
}

const FALLBACK_STYLE: &str = r#"        body { font-family: Arial, sans-serif; text-align: center; padding: 50px; background: #f5f5f5; }
        .container { background: white; padding: 40px; border-radius: 20px; max-width: 400px; margin: 0 auto; }
        .error { color: #e74c3c; margin: 20px 0; }
        .retry-btn { background: #007bff; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; }"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_document;

    fn link(title: &str, url: &str, order_index: i64) -> LinkEntry {
        LinkEntry { id: order_index, title: title.into(), url: url.into(), active: true, order_index }
    }

    fn social(platform: &str, url: &str, order_index: i64) -> SocialEntry {
        SocialEntry { id: order_index, platform: platform.into(), url: url.into(), active: true, order_index }
    }

    #[test]
    fn renders_settings_links_and_socials_in_order() {
        let page = PageSettings {
            handler_text: "Kim".into(),
            handler_description: "Hello".into(),
            accent_color: "#123456".into(),
            ..PageSettings::default()
        };
        let links = [link("Blog", "https://blog.example", 1), link("Shop", "https://shop.example", 2)];
        let socials = [social("github", "https://github.com/kim", 1)];

        let html = render_document(&home(&page, &links, &socials));

        assert!(html.contains("<title>Kim - Link Tree</title>"));
        assert!(html.contains(r#"<meta name="description" content="Hello">"#));
        assert!(html.contains(r#"<div class="handler-text">Kim</div>"#));
        assert!(html.contains("border: 2px solid #12345630;"));
        let blog = html.find("https://blog.example").unwrap();
        let shop = html.find("https://shop.example").unwrap();
        assert!(blog < shop);
        assert!(html.contains(r#"title="github">G</a>"#));
        assert!(html.contains("console.log('Links: 2, Social: 1');"));
        assert!(html.contains("font-size: 14px; display: block;"));
    }

    #[test]
    fn no_social_row_without_socials() {
        let html = render_document(&home(&PageSettings::default(), &[], &[]));
        assert!(!html.contains(r#"<div class="social-links">"#));
        assert!(html.contains(r#"<div class="avatar">🌟</div>"#));
    }

    #[test]
    fn disabled_footer_is_hidden() {
        let page = PageSettings { footer_enabled: false, ..PageSettings::default() };
        let html = render_document(&home(&page, &[], &[]));
        assert!(html.contains("font-size: 14px; display: none;"));
    }

    #[test]
    fn avatar_url_replaces_placeholder() {
        let page = PageSettings { avatar_url: "/me.png".into(), ..PageSettings::default() };
        let html = render_document(&home(&page, &[], &[]));
        assert!(html.contains(r#"<img src="/me.png""#));
        assert!(html.contains(r#"<meta property="og:image" content="/me.png">"#));
    }

    #[test]
    fn settings_are_not_escaped() {
        let page = PageSettings { handler_text: "<b>bold</b>".into(), ..PageSettings::default() };
        let html = render_document(&home(&page, &[], &[]));
        assert!(html.contains(r#"<div class="handler-text"><b>bold</b></div>"#));
    }

    #[test]
    fn fallback_shows_error() {
        let html = render_document(&home_fallback("disk I/O error"));
        assert!(html.contains("Database connection error"));
        assert!(html.contains("<small>Error: disk I/O error</small>"));
        assert!(html.contains(r#"<a href="/admin">Admin Panel</a>"#));
    }

    #[test]
    fn initial_handles_empty_and_unicode() {
        assert_eq!(initial("instagram"), "I");
        assert_eq!(initial(""), "");
        assert_eq!(initial("ß"), "SS");
    }
}
