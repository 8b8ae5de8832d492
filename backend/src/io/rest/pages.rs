//! Static page handlers.
//!
//! The pages themselves are external collaborators of the backend; they
//! are embedded at compile time and served as-is. All dynamic behavior
//! happens client-side against the JSON endpoints.

use axum::response::Html;

/// Main calendar page.
pub async fn calendar_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}

/// Blank medication entry form.
pub async fn add_medication_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/add_medication.html"))
}

/// Blank seizure entry form.
pub async fn add_seizure_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/add_seizure.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_calendar_page_loads_events_feed() {
        let Html(page) = calendar_page().await;
        assert!(page.contains("/api/events"));
    }

    #[tokio::test]
    async fn test_form_pages_post_to_submit_endpoints() {
        let Html(page) = add_medication_page().await;
        assert!(page.contains("/submit_medication"));
        assert!(page.contains("name=\"frequency\""));

        let Html(page) = add_seizure_page().await;
        assert!(page.contains("/submit_seizure"));
        assert!(page.contains("name=\"seizure_type\""));
    }
}
