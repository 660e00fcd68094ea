use super::Document;

/// Editor for the page settings, gated in the browser on the stored token.
///
/// The gate is cosmetic: the page itself is served to anyone.
pub fn dashboard() -> Document {
    Document {
        title: "Dashboard - Linkin".into(),
        meta: String::new(),
        style: STYLE.into(),
        body: BODY.into(),
        script: SCRIPT.into(),
    }
}

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background: #f8f9fa; }
        .container { max-width: 1000px; margin: 0 auto; }
        .header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 30px; }
        .logout-btn { background: #dc3545; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; }
        .card { background: white; border-radius: 10px; padding: 20px; margin-bottom: 20px; box-shadow: 0 2px 10px rgba(0,0,0,0.05); }
        .stats { display: flex; gap: 20px; margin-bottom: 20px; }
        .stat { flex: 1; background: white; border-radius: 10px; padding: 20px; text-align: center; }
        .stat-number { font-size: 32px; font-weight: bold; color: #007bff; }
        .form-group { margin-bottom: 15px; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        input[type=text], textarea { width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 5px; box-sizing: border-box; }
        .save-btn { background: #28a745; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; }
        .message { padding: 10px; border-radius: 5px; margin-bottom: 20px; }
        .message.success { background: #d4edda; color: #155724; }
        .message.error { background: #f8d7da; color: #721c24; }
        .loading { text-align: center; padding: 50px; }
        .hidden { display: none; }"#;

const BODY: &str = r#"    <div id="loading" class="loading">
        <p>Checking session...</p>
    </div>

    <div id="dashboard" class="container hidden">
        <div class="header">
            <h1>📊 Dashboard</h1>
            <button id="logoutBtn" class="logout-btn">Logout</button>
        </div>

        <div class="card">
            <strong>User:</strong> <span id="username">-</span><br>
            <strong>Logged in at:</strong> <span id="loginTime">-</span>
        </div>

        <div class="stats">
            <div class="stat">
                <div class="stat-number" id="linkCount">-</div>
                <div>Links</div>
            </div>
            <div class="stat">
                <div class="stat-number" id="socialCount">-</div>
                <div>Socials</div>
            </div>
        </div>

        <div id="message" class="message" style="display: none;"></div>

        <div class="card">
            <h2>Page settings</h2>
            <form id="pageDataForm">
                <div class="form-group">
                    <label for="handlerText">Name</label>
                    <input type="text" id="handlerText" name="handlerText" required>
                </div>
                <div class="form-group">
                    <label for="handlerDescription">Description</label>
                    <textarea id="handlerDescription" name="handlerDescription" rows="3"></textarea>
                </div>
                <div class="form-group">
                    <label for="bgColor">Background color</label>
                    <input type="color" id="bgColor" name="bgColor">
                </div>
                <div class="form-group">
                    <label for="accentColor">Accent color</label>
                    <input type="color" id="accentColor" name="accentColor">
                </div>
                <button type="submit" class="save-btn">Save</button>
            </form>
        </div>

        <div class="card">
            <h2>Data status</h2>
            <p><strong>Page data:</strong> <span id="pageDataStatus">Loading...</span></p>
            <p><strong>Links:</strong> <span id="linkDataStatus">Loading...</span></p>
            <p><strong>Socials:</strong> <span id="socialDataStatus">Loading...</span></p>
            <p><strong>Last refresh:</strong> <span id="lastUpdate">-</span></p>
        </div>

        <p><a href="/" target="_blank">View page →</a></p>
    </div>

    <div id="unauthorized" class="container hidden">
        <div class="card">
            <h1>🔒 Unauthorized</h1>
            <p>Your session is missing or has expired.</p>
            <p><a href="/admin">Log in</a></p>
        </div>
    </div>"#;

const SCRIPT: &str = r#"        function checkAuth() {
            const token = localStorage.getItem('auth_token');

            if (!token) {
                showUnauthorized();
                return false;
            }

            try {
                const payload = JSON.parse(atob(token));

                if (payload.expires <= Date.now()) {
                    localStorage.removeItem('auth_token');
                    showUnauthorized();
                    return false;
                }

                document.getElementById('username').textContent = payload.username;
                document.getElementById('loginTime').textContent = new Date(payload.timestamp).toLocaleString();

                showDashboard();
                loadData();
                return true;
            } catch (error) {
                localStorage.removeItem('auth_token');
                showUnauthorized();
                return false;
            }
        }

        function showDashboard() {
            document.getElementById('loading').classList.add('hidden');
            document.getElementById('dashboard').classList.remove('hidden');
            document.getElementById('unauthorized').classList.add('hidden');
        }

        function showUnauthorized() {
            document.getElementById('loading').classList.add('hidden');
            document.getElementById('dashboard').classList.add('hidden');
            document.getElementById('unauthorized').classList.remove('hidden');
        }

        async function loadData() {
            try {
                const response = await fetch('/api/pagedata');
                const data = await response.json();

                if (data.success) {
                    updateUI(data);
                } else {
                    showMessage('Failed to load data: ' + data.message, 'error');
                }
            } catch (error) {
                showMessage('Server error: ' + error.message, 'error');
            }
        }

        function updateUI(data) {
            const links = data.linkData ? data.linkData.length : 0;
            const socials = data.socialData ? data.socialData.length : 0;
            const page = data.pageData || {};

            document.getElementById('linkCount').textContent = links;
            document.getElementById('socialCount').textContent = socials;
            document.getElementById('pageDataStatus').textContent = page.handlerText !== undefined ? '✅ OK' : '❌ Missing';
            document.getElementById('linkDataStatus').textContent = '✅ ' + links;
            document.getElementById('socialDataStatus').textContent = '✅ ' + socials;
            document.getElementById('lastUpdate').textContent = new Date().toLocaleString();

            document.getElementById('handlerText').value = page.handlerText || '';
            document.getElementById('handlerDescription').value = page.handlerDescription || '';
            document.getElementById('bgColor').value = page.bgColor || '#ffffff';
            document.getElementById('accentColor').value = page.accentColor || '#007bff';
        }

        function showMessage(text, type) {
            const messageDiv = document.getElementById('message');
            messageDiv.className = 'message ' + type;
            messageDiv.textContent = text;
            messageDiv.style.display = 'block';
            setTimeout(() => { messageDiv.style.display = 'none'; }, 5000);
        }

        document.getElementById('pageDataForm').addEventListener('submit', async function(e) {
            e.preventDefault();
            const data = Object.fromEntries(new FormData(e.target));

            try {
                const response = await fetch('/api/updatepagedata', {
                    method: 'POST',
                    headers: {
                        'Content-Type': 'application/json',
                        'Authorization': 'Bearer ' + localStorage.getItem('auth_token')
                    },
                    body: JSON.stringify(data)
                });
                const result = await response.json();

                if (result.success) {
                    showMessage('Page data saved.', 'success');
                    setTimeout(loadData, 1000);
                } else {
                    showMessage('Save failed: ' + result.message, 'error');
                }
            } catch (error) {
                showMessage('Server error: ' + error.message, 'error');
            }
        });

        document.getElementById('logoutBtn').addEventListener('click', async function() {
            try {
                await fetch('/api/user/logout', { method: 'POST' });
            } catch (error) {
                console.error('Logout request failed:', error);
            }
            localStorage.removeItem('auth_token');
            window.location.href = '/admin';
        });

        window.addEventListener('load', function() {
            setTimeout(checkAuth, 500);
        });"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_document;

    #[test]
    fn expired_tokens_show_unauthorized_panel() {
        let html = render_document(&dashboard());
        // Same comparison as SessionToken::is_valid_at, negated
        assert!(html.contains(
            "if (payload.expires <= Date.now()) {\n                    localStorage.removeItem('auth_token');\n                    showUnauthorized();"
        ));
        assert!(html.contains(r#"<div id="unauthorized" class="container hidden">"#));
    }

    #[test]
    fn edits_the_four_page_fields() {
        let html = render_document(&dashboard());
        for field in ["handlerText", "handlerDescription", "bgColor", "accentColor"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)), "missing {}", field);
        }
        assert!(html.contains("fetch('/api/updatepagedata'"));
        assert!(html.contains("'Authorization': 'Bearer ' + localStorage.getItem('auth_token')"));
    }

    #[test]
    fn logout_drops_local_token() {
        let html = render_document(&dashboard());
        assert!(html.contains("fetch('/api/user/logout', { method: 'POST' })"));
        assert!(html.contains("window.location.href = '/admin';"));
    }
}
