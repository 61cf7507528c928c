//! Server-side rendering of the single page. Pure functions over the view
//! model; every interpolated value is escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::SearchView;

use super::validation::FieldErrors;

pub const FORM_SEARCH_ID: &str = "search";
pub const FORM_DELETE_HISTORY_ID: &str = "delete-history";

pub fn render_page(view: Option<&SearchView>, user_id: &str, errors: &FieldErrors) -> String {
    let mut page = String::with_capacity(2048);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<title>Giphy Search</title>\n");
    page.push_str("<meta name=\"description\" content=\"Search you gif!\">\n");
    page.push_str("</head>\n<body>\n");
    page.push_str("<main style=\"font-family: system-ui, sans-serif; line-height: 1.8\">\n");
    page.push_str("<h1>Giphy Search</h1>\n");

    page.push_str("<section class=\"form-container\">\n");
    render_search_form(&mut page, view, user_id, errors);
    render_history(&mut page, view);
    page.push_str("</section>\n");

    render_gifs(&mut page, view);

    page.push_str("</main>\n</body>\n</html>\n");
    page
}

/// Minimal unstyled failure page for upstream and store errors.
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Giphy Search</title>\n</head>\n<body>\n\
         <h1>Giphy Search</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>\n\
         </body>\n</html>\n",
        encode_text(message)
    )
}

fn render_search_form(
    page: &mut String,
    view: Option<&SearchView>,
    user_id: &str,
    errors: &FieldErrors,
) {
    // The input keeps the last submitted term so the page remembers what
    // was typed.
    let last_term = view.map(|v| v.search_term.as_str()).unwrap_or_default();

    page.push_str("<form class=\"form\" method=\"post\" action=\"/\">\n");
    page.push_str(&format!(
        "<input type=\"hidden\" name=\"action\" value=\"{FORM_SEARCH_ID}\">\n"
    ));
    page.push_str("<label for=\"search\">Search</label>\n");
    page.push_str(&format!(
        "<input type=\"text\" name=\"search\" id=\"search\" value=\"{}\">\n",
        encode_double_quoted_attribute(last_term)
    ));
    page.push_str(&format!(
        "<input type=\"hidden\" name=\"userId\" value=\"{}\">\n",
        encode_double_quoted_attribute(user_id)
    ));

    if let Some(message) = errors.get("search") {
        page.push_str(&format!("<p>{}</p>\n", encode_text(message)));
    }
    if let Some(message) = errors.get("userId") {
        page.push_str(&format!("<p>{}</p>\n", encode_text(message)));
    }

    page.push_str("<button type=\"submit\">Search</button>\n");
    page.push_str("</form>\n");
}

fn render_history(page: &mut String, view: Option<&SearchView>) {
    let Some(view) = view else {
        return;
    };

    if view.history.is_empty() {
        page.push_str("<p>No history</p>\n");
        return;
    }

    page.push_str("<div class=\"history\">\n<ul>\n");
    for term in &view.history {
        page.push_str(&format!("<li>{}</li>\n", encode_text(term)));
    }
    page.push_str("</ul>\n");

    page.push_str("<form method=\"post\" action=\"/\">\n");
    page.push_str(&format!(
        "<input type=\"hidden\" name=\"action\" value=\"{FORM_DELETE_HISTORY_ID}\">\n"
    ));
    page.push_str(&format!(
        "<input type=\"hidden\" name=\"searchTerm\" value=\"{}\">\n",
        encode_double_quoted_attribute(&view.search_term)
    ));
    page.push_str("<button>Delete history</button>\n");
    page.push_str("</form>\n</div>\n");
}

fn render_gifs(page: &mut String, view: Option<&SearchView>) {
    let Some(view) = view else {
        return;
    };

    if view.gifs.is_empty() {
        page.push_str("<p>No results</p>\n");
        return;
    }

    page.push_str("<ul>\n");
    for (index, gif) in view.gifs.iter().enumerate() {
        page.push_str(&format!(
            "<img src=\"{}\" alt=\"{}-{}\">\n",
            encode_double_quoted_attribute(&gif.url),
            encode_double_quoted_attribute(&view.search_term),
            index + 1
        ));
    }
    page.push_str("</ul>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gif;

    #[test]
    fn first_load_renders_neither_placeholder() {
        let page = render_page(None, "u1", &FieldErrors::default());
        assert!(page.contains("Giphy Search"));
        assert!(page.contains("name=\"userId\" value=\"u1\""));
        assert!(!page.contains("No history"));
        assert!(!page.contains("No results"));
    }

    #[test]
    fn empty_view_renders_both_placeholders() {
        let view = SearchView::default();
        let page = render_page(Some(&view), "u1", &FieldErrors::default());
        assert!(page.contains("No history"));
        assert!(page.contains("No results"));
        assert!(!page.contains("Delete history"));
    }

    #[test]
    fn gifs_get_positional_captions() {
        let view = SearchView {
            search_term: "cats".to_string(),
            gifs: vec![
                Gif {
                    id: "h1".to_string(),
                    url: "https://media.example/1.webp".to_string(),
                },
                Gif {
                    id: "h2".to_string(),
                    url: "https://media.example/2.webp".to_string(),
                },
            ],
            history: vec!["cats".to_string()],
        };

        let page = render_page(Some(&view), "u1", &FieldErrors::default());
        assert!(page.contains("alt=\"cats-1\""));
        assert!(page.contains("alt=\"cats-2\""));
        assert!(page.contains("<li>cats</li>"));
        assert!(page.contains("Delete history"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let view = SearchView {
            search_term: "<script>".to_string(),
            gifs: Vec::new(),
            history: vec!["<script>".to_string()],
        };

        let page = render_page(Some(&view), "\"><script>", &FieldErrors::default());
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn field_errors_show_up_in_the_form() {
        let mut errors = FieldErrors::default();
        errors.push("search", "String must contain at least 1 character(s)");

        let page = render_page(None, "u1", &errors);
        assert!(page.contains("String must contain at least 1 character(s)"));
    }
}
