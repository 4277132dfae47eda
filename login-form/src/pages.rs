//! Server-rendered HTML pages.
//!
//! No template engine; the two pages are small enough that const templates
//! with a single substitution slot keep the dependency surface flat.

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Sign in</title></head>
<body>
<h1>Sign in</h1>
<!--ERROR-->
<form method="post" action="/login">
  <label>Login <input type="text" name="login"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Sign in</button>
</form>
</body>
</html>
"#;

const HOME_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Home</title></head>
<body>
<h1><!--GREETING--></h1>
</body>
</html>
"#;

/// Escape text for interpolation into HTML element content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the login form, with an error banner when `error` is set.
pub fn login_page(error: Option<&str>) -> String {
    let banner = error
        .map(|message| format!("<p class=\"error\">{}</p>", escape(message)))
        .unwrap_or_default();
    LOGIN_PAGE.replace("<!--ERROR-->", &banner)
}

/// Render the home page, greeting the signed-in user when known.
pub fn home_page(user: Option<&str>) -> String {
    let greeting = match user {
        Some(name) => format!("Welcome, {}!", escape(name)),
        None => "Welcome!".to_owned(),
    };
    HOME_PAGE.replace("<!--GREETING-->", &greeting)
}
