// src/render.rs

//! HTML pages returned to the commenter.
//!
//! Every value that comes from configuration or from the submission is passed
//! through [`html_escape`]. Template text is not.

use crate::escape::html_escape;
use crate::models::{Comment, Config};

/// Shown when the caller passes an empty error message.
pub const MISSING_ERROR_MESSAGE: &str = "Error message is missing";

/// Page telling the commenter their comment could not be submitted.
pub fn render_error(config: &Config, message: &str) -> String {
    let message = if message.is_empty() {
        MISSING_ERROR_MESSAGE
    } else {
        message
    };

    format!(
        r#"<!DOCTYPE html>
<meta charset="utf-8">
<title>{title} - Error!</title>
<meta name="viewport" content="width=device-width, user-scalable=no">
<h1>Error!</h1>
<p>Unfortunately I was not able to submit your comment. Sorry!</p>
<p>The error was: {message}</p>
<p>If you think this is a mistake, I'd appreciate hearing about it!
Please contact me at {admin}.
Thank you!</p>
"#,
        title = html_escape(&config.page_title),
        message = html_escape(message),
        admin = html_escape(&config.admin_email),
    )
}

/// Page thanking the commenter and linking back to the page they came from.
pub fn render_success(config: &Config, comment: &Comment) -> String {
    format!(
        r#"<!DOCTYPE html>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, user-scalable=no">
<title>{title} - Thank you</title>
<h1>Thank you</h1>
<p>Thanks for the comment, {name}!
You should see it posted soon.</p>
<p>To go back where you were, please click
<a href="{url}">here</a>.</p>
"#,
        title = html_escape(&config.page_title),
        name = html_escape(comment.name()),
        url = html_escape(comment.url()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_comment;

    fn config() -> Config {
        Config {
            page_title: "my site".to_string(),
            admin_email: "joe@example.com".to_string(),
            ..Config::default()
        }
    }

    fn comment(name: &str, url: &str) -> Comment {
        Comment {
            name: name.to_string(),
            url: url.to_string(),
            ..sample_comment()
        }
    }

    #[test]
    fn test_error_page() {
        let html = render_error(&config(), "The site is down");
        assert!(html.starts_with("<!DOCTYPE html>\n<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>my site - Error!</title>"));
        assert!(html.contains("I was not able to submit your comment"));
        assert!(html.contains("The error was: The site is down"));
        assert!(html.contains("Please contact me at joe@example.com"));
    }

    #[test]
    fn test_error_page_missing_message() {
        let html = render_error(&config(), "");
        assert!(html.contains("The error was: Error message is missing</p>"));
    }

    #[test]
    fn test_error_page_escapes_everything() {
        let config = Config {
            page_title: "Bob's <blog>".to_string(),
            admin_email: "\"bob\"@example.com".to_string(),
            ..Config::default()
        };
        let html = render_error(&config, "<script>alert(1)</script>");
        assert!(html.contains("<title>Bob&#39;s &lt;blog&gt; - Error!</title>"));
        assert!(html.contains("The error was: &lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Please contact me at &#34;bob&#34;@example.com."));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_success_page() {
        let html = render_success(
            &config(),
            &comment("John Public", "https://www.example.com"),
        );
        assert!(html.contains("<title>my site - Thank you</title>"));
        assert!(html.contains("Thanks for the comment, John Public!"));
        assert!(html.contains("please click\n<a href=\"https://www.example.com\">here</a>"));
    }

    #[test]
    fn test_success_page_escapes_name() {
        let html = render_success(
            &config(),
            &comment("John P&ublic", "https://www.example.com"),
        );
        assert!(html.contains("Thanks for the comment, John P&amp;ublic!"));
        assert!(html.contains("<a href=\"https://www.example.com\">here</a>"));
    }

    #[test]
    fn test_success_page_url_cannot_break_attribute() {
        let html = render_success(
            &config(),
            &comment("x", "https://e.com/\" onclick=\"evil()"),
        );
        assert!(html.contains("<a href=\"https://e.com/&#34; onclick=&#34;evil()\">here</a>"));
    }
}
