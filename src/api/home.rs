use actix_web::{HttpResponse, Responder, get, http::header::ContentType};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Admin page driving the JSON API from the browser.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
