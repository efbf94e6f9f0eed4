#![allow(missing_docs)]

pub(crate) mod backend;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use backend::{
    sample_response, sample_transaction, spawn_backend, spawn_unresponsive_backend,
    transactions_backend, unused_local_url,
};
pub(crate) use html::{
    assert_valid_html, must_select_one, parse_html_document, parse_html_fragment, text_of,
};
pub(crate) use http::{assert_content_type, assert_status_ok};
