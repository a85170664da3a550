//! Server-rendered listing page.

use crate::domain::user::UserProfile;

use crate::adapters::http::users::USERS_PATH;

/// Renders the user table as a complete HTML document.
pub fn render_user_list(users: &[UserProfile]) -> String {
    let mut rows = String::new();
    if users.is_empty() {
        rows.push_str("        <tr><td colspan=\"3\" class=\"empty\">No users yet</td></tr>\n");
    }
    for user in users {
        rows.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td class=\"emoji\">{}</td></tr>\n",
            escape_html(user.id().as_str()),
            escape_html(user.full_name()),
            escape_html(user.emoji()),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>User Profiles</title>
    <style>
        body {{ font-family: sans-serif; margin: 2rem; }}
        table {{ border-collapse: collapse; min-width: 24rem; }}
        th, td {{ border: 1px solid #ccc; padding: 0.5rem 1rem; text-align: left; }}
        th {{ background: #f4f4f4; }}
        td.emoji {{ font-size: 1.5rem; text-align: center; }}
        td.empty {{ color: #888; text-align: center; }}
    </style>
</head>
<body>
    <h1>User Profiles</h1>
    <p>{count} user(s). JSON API: <a href="{api}">{api}</a></p>
    <table>
        <thead><tr><th>ID</th><th>Name</th><th>Emoji</th></tr></thead>
        <tbody>
{rows}        </tbody>
    </table>
</body>
</html>
"#,
        count = users.len(),
        api = USERS_PATH,
        rows = rows,
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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
