use super::Document;

/// Login form. The token from `/api/user/login` is kept in local storage.
pub fn admin() -> Document {
    Document {
        title: "Admin - Linkin".into(),
        meta: String::new(),
        style: STYLE.into(),
        body: BODY.into(),
        script: SCRIPT.into(),
    }
}

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; background: #f5f5f5; display: flex; align-items: center; justify-content: center; min-height: 100vh; margin: 0; }
        .login-container { background: white; padding: 40px; border-radius: 10px; box-shadow: 0 10px 30px rgba(0,0,0,0.1); width: 100%; max-width: 400px; }
        h1 { text-align: center; color: #333; margin-bottom: 30px; }
        .form-group { margin-bottom: 20px; }
        label { display: block; margin-bottom: 5px; color: #555; font-weight: bold; }
        input { width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 5px; font-size: 16px; box-sizing: border-box; }
        button { width: 100%; padding: 12px; background: #007bff; color: white; border: none; border-radius: 5px; font-size: 16px; cursor: pointer; }
        button:disabled { background: #6c757d; cursor: not-allowed; }
        .message { margin-top: 20px; padding: 10px; border-radius: 5px; text-align: center; display: none; }
        .message.success { background: #d4edda; color: #155724; }
        .message.error { background: #f8d7da; color: #721c24; }
        .back-link { text-align: center; margin-top: 20px; }"#;

const BODY: &str = r#"    <div class="login-container">
        <h1>🔐 Admin Login</h1>
        <div id="message" class="message"></div>
        <form id="loginForm">
            <div class="form-group">
                <label for="username">Username</label>
                <input type="text" id="username" name="username" placeholder="Enter username" required>
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" placeholder="Enter password" required>
            </div>
            <button type="submit" id="loginBtn">Login</button>
        </form>
        <div class="back-link"><a href="/">← Back to Link Tree</a></div>
    </div>"#;

const SCRIPT: &str = r#"        document.getElementById('loginForm').addEventListener('submit', async function(e) {
            e.preventDefault();
            const loginBtn = document.getElementById('loginBtn');
            const messageDiv = document.getElementById('message');
            const username = document.getElementById('username').value;
            const password = document.getElementById('password').value;

            loginBtn.disabled = true;
            loginBtn.textContent = 'Logging in...';
            messageDiv.style.display = 'none';

            try {
                const response = await fetch('/api/user/login', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ username, password })
                });
                const data = await response.json();

                if (data.success) {
                    localStorage.setItem('auth_token', data.token);
                    messageDiv.className = 'message success';
                    messageDiv.textContent = 'Login successful. Redirecting...';
                    messageDiv.style.display = 'block';
                    setTimeout(() => { window.location.href = data.redirect || '/dashboard'; }, 1000);
                } else {
                    messageDiv.className = 'message error';
                    messageDiv.textContent = data.message || 'Login failed.';
                    messageDiv.style.display = 'block';
                }
            } catch (error) {
                messageDiv.className = 'message error';
                messageDiv.textContent = 'Server error.';
                messageDiv.style.display = 'block';
            } finally {
                loginBtn.disabled = false;
                loginBtn.textContent = 'Login';
            }
        });

        window.addEventListener('load', function() {
            const token = localStorage.getItem('auth_token');
            if (token) {
                try {
                    const payload = JSON.parse(atob(token));
                    if (payload.expires > Date.now()) {
                        window.location.href = '/dashboard';
                    }
                } catch (error) {
                    localStorage.removeItem('auth_token');
                }
            }
        });"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_document;

    #[test]
    fn posts_credentials_and_keeps_token() {
        let html = render_document(&admin());
        assert!(html.contains(r#"<form id="loginForm">"#));
        assert!(html.contains("fetch('/api/user/login'"));
        assert!(html.contains("localStorage.setItem('auth_token', data.token)"));
    }

    #[test]
    fn skips_login_only_for_unexpired_token() {
        let html = render_document(&admin());
        assert!(html.contains("if (payload.expires > Date.now())"));
        assert!(html.contains("localStorage.removeItem('auth_token')"));
    }
}
