use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::render;
use super::validation::{self, FieldErrors};
use super::{ApiError, AppState};

/// Raw form payload. Both forms post to the same endpoint and are told
/// apart by the `action` field before any business logic runs.
#[derive(Debug, Deserialize)]
pub struct PageForm {
    pub action: Option<String>,

    pub search: Option<String>,

    #[serde(rename = "userId")]
    pub user_id: Option<String>,

    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// The two things a submit can mean.
#[derive(Debug, PartialEq, Eq)]
pub enum RequestIntent {
    Search {
        search: Option<String>,
        user_id: Option<String>,
    },
    DeleteHistory {
        /// Echoed back for display continuity only; deletion ignores it.
        echo_term: String,
    },
}

impl RequestIntent {
    #[must_use]
    pub fn from_form(form: PageForm) -> Self {
        if form.action.as_deref() == Some(render::FORM_DELETE_HISTORY_ID) {
            Self::DeleteHistory {
                echo_term: form.search_term.unwrap_or_default(),
            }
        } else {
            Self::Search {
                search: form.search,
                user_id: form.user_id,
            }
        }
    }
}

/// `GET /` — first load, no view model yet.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render::render_page(
        None,
        state.identity(),
        &FieldErrors::default(),
    ))
}

/// `POST /` — resolves the intent, then drives the orchestrator.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PageForm>,
) -> Result<Response, ApiError> {
    match RequestIntent::from_form(form) {
        RequestIntent::DeleteHistory { echo_term } => {
            // Clears the whole identity's history, not just the echoed term.
            let view = state
                .search_service()
                .delete_history(state.identity(), &echo_term)
                .await?;

            let body = render::render_page(Some(&view), state.identity(), &FieldErrors::default());
            Ok(Html(body).into_response())
        }
        RequestIntent::Search { search, user_id } => {
            let (search, user_id) =
                match validation::validate_search_form(search.as_deref(), user_id.as_deref()) {
                    Ok(fields) => fields,
                    Err(errors) => {
                        let body = render::render_page(None, state.identity(), &errors);
                        return Ok(
                            (StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response()
                        );
                    }
                };

            let view = state.search_service().search(&user_id, &search).await?;

            let body = render::render_page(Some(&view), state.identity(), &FieldErrors::default());
            Ok(Html(body).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        action: Option<&str>,
        search: Option<&str>,
        user_id: Option<&str>,
        search_term: Option<&str>,
    ) -> PageForm {
        PageForm {
            action: action.map(String::from),
            search: search.map(String::from),
            user_id: user_id.map(String::from),
            search_term: search_term.map(String::from),
        }
    }

    #[test]
    fn delete_action_resolves_to_delete_intent() {
        let intent = RequestIntent::from_form(form(
            Some("delete-history"),
            None,
            None,
            Some("cats"),
        ));
        assert_eq!(
            intent,
            RequestIntent::DeleteHistory {
                echo_term: "cats".to_string()
            }
        );
    }

    #[test]
    fn anything_else_resolves_to_search_intent() {
        let intent = RequestIntent::from_form(form(Some("search"), Some("cats"), Some("u1"), None));
        assert_eq!(
            intent,
            RequestIntent::Search {
                search: Some("cats".to_string()),
                user_id: Some("u1".to_string()),
            }
        );

        let intent = RequestIntent::from_form(form(None, Some("cats"), Some("u1"), None));
        assert!(matches!(intent, RequestIntent::Search { .. }));
    }
}
