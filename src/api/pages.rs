//! HTML rendering — self-contained pages (no external deps).
//!
//! Every user-supplied value is escaped before it is echoed back into
//! the form or the confirmation view.

use crate::intake::IntakeForm;

/// Escape a value for interpolation into HTML text or attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

const PAGE_STYLE: &str = "*,*::before,*::after{box-sizing:border-box}\
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;\
background:#fafaf9;color:#1c1917;display:flex;align-items:center;justify-content:center;\
min-height:100vh;padding:24px}\
.card{background:#fff;border-radius:16px;box-shadow:0 4px 24px rgba(0,0,0,.08);\
max-width:440px;width:100%;padding:32px}\
h1{font-size:1.25rem;margin:0 0 16px;text-align:center}\
label{display:block;font-size:.9rem;font-weight:600;margin-bottom:4px}\
input{display:block;width:100%;padding:12px;border:1px solid #d6d3d1;border-radius:8px;\
font-size:1rem;margin-bottom:16px}\
.btn{display:block;width:100%;padding:16px;border:none;border-radius:12px;font-size:1rem;\
font-weight:600;cursor:pointer;background:#2DD4BF;color:#fff;text-align:center;\
text-decoration:none}\
.error{background:#fef2f2;border:1px solid #fecaca;border-radius:8px;color:#b91c1c;\
padding:12px;margin-bottom:16px;font-size:.9rem}\
dt{font-size:.8rem;color:#78716c}\
dd{margin:0 0 12px;font-size:1rem}";

/// Render the intake form. `values` pre-fills the inputs (empty on the
/// first visit); `error` adds the banner above the form.
pub fn render_form_page(values: &IntakeForm, error: Option<&str>) -> String {
    let error_banner = match error {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, escape_html(msg)),
        None => String::new(),
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Patient Intake</title>
<style>{style}</style>
</head>
<body>
<div class="card">
  <h1>Patient Intake</h1>
  {error_banner}
  <form method="post" action="/submit">
    <label for="first_name">First name</label>
    <input type="text" id="first_name" name="first_name" value="{first_name}">
    <label for="last_name">Last name</label>
    <input type="text" id="last_name" name="last_name" value="{last_name}">
    <label for="dob">Date of birth</label>
    <input type="text" id="dob" name="dob" placeholder="YYYY-MM-DD" value="{dob}">
    <label for="therapist">Assigned therapist</label>
    <input type="text" id="therapist" name="therapist" value="{therapist}">
    <button class="btn" type="submit">Submit</button>
  </form>
</div>
</body>
</html>"##,
        style = PAGE_STYLE,
        error_banner = error_banner,
        first_name = escape_html(&values.first_name),
        last_name = escape_html(&values.last_name),
        dob = escape_html(&values.dob),
        therapist = escape_html(&values.therapist),
    )
}

/// Render the confirmation view for a stored submission.
pub fn render_confirmation_page(values: &IntakeForm) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Submission Received</title>
<style>{style}</style>
</head>
<body>
<div class="card">
  <h1>Submission Received</h1>
  <dl>
    <dt>First name</dt><dd>{first_name}</dd>
    <dt>Last name</dt><dd>{last_name}</dd>
    <dt>Date of birth</dt><dd>{dob}</dd>
    <dt>Assigned therapist</dt><dd>{therapist}</dd>
  </dl>
  <a class="btn" href="/">New intake</a>
</div>
</body>
</html>"##,
        style = PAGE_STYLE,
        first_name = escape_html(&values.first_name),
        last_name = escape_html(&values.last_name),
        dob = escape_html(&values.dob),
        therapist = escape_html(&values.therapist),
    )
}

/// Generic failure page for storage-layer faults.
pub fn render_error_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Server Error</title>
<style>{style}</style>
</head>
<body>
<div class="card">
  <h1>Something went wrong</h1>
  <p>Your submission could not be saved. Please try again.</p>
  <a class="btn" href="/">Back to form</a>
</div>
</body>
</html>"##,
        style = PAGE_STYLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_all_inputs_and_no_error() {
        let html = render_form_page(&IntakeForm::default(), None);
        assert!(html.contains(r#"name="first_name""#));
        assert!(html.contains(r#"name="last_name""#));
        assert!(html.contains(r#"name="dob""#));
        assert!(html.contains(r#"name="therapist""#));
        assert!(html.contains(r#"action="/submit""#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn error_form_shows_message_and_preserves_values() {
        let values = IntakeForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            dob: "not-a-date".into(),
            therapist: "Dr. Smith".into(),
        };
        let html = render_form_page(&values, Some("Invalid date format. Use YYYY-MM-DD."));
        assert!(html.contains("Invalid date format. Use YYYY-MM-DD."));
        assert!(html.contains(r#"value="Jane""#));
        assert!(html.contains(r#"value="Doe""#));
        assert!(html.contains(r#"value="not-a-date""#));
        assert!(html.contains(r#"value="Dr. Smith""#));
    }

    #[test]
    fn confirmation_shows_submitted_values() {
        let values = IntakeForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            dob: "1990-01-01".into(),
            therapist: "Dr. Smith".into(),
        };
        let html = render_confirmation_page(&values);
        assert!(html.contains("Jane"));
        assert!(html.contains("Doe"));
        assert!(html.contains("1990-01-01"));
        assert!(html.contains("Dr. Smith"));
    }

    #[test]
    fn user_input_is_escaped() {
        let values = IntakeForm {
            first_name: r#"<script>alert("x")</script>"#.into(),
            last_name: "O'Brien".into(),
            dob: "1990-01-01".into(),
            therapist: "Dr. Smith".into(),
        };
        let html = render_form_page(&values, None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("O&#39;Brien"));
    }

    #[test]
    fn escape_html_covers_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
