use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let text = body_text(response).await;

    Html::parse_document(&text)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    let text = body_text(response).await;

    Html::parse_fragment(&text)
}

async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Get the only element matching `selector`, panicking if there are none or many.
#[track_caller]
pub(crate) fn must_select_one<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
    let parsed = Selector::parse(selector).unwrap();
    let mut matches = html.select(&parsed);

    let element = matches
        .next()
        .unwrap_or_else(|| panic!("No element matching {selector}"));
    assert!(
        matches.next().is_none(),
        "Want exactly one element matching {selector}, got more"
    );

    element
}

/// The text content of `element` with surrounding whitespace removed.
pub(crate) fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_owned()
}
