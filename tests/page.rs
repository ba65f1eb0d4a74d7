//! Browser-side checks for the page bootstrap. Run with wasm-pack /
//! wasm-bindgen-test-runner against wasm32; compiled out elsewhere.

#![cfg(target_arch = "wasm32")]

use blog_admin::page::bootstrap;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn render(html: &str) -> Document {
    let doc = document();
    doc.body().unwrap().set_inner_html(html);
    doc
}

#[wasm_bindgen_test]
fn page_without_container_gets_no_controls() {
    let doc = render("<p>not an article page</p>");
    assert!(bootstrap(&doc).is_none());
}

#[wasm_bindgen_test]
fn context_is_read_from_the_container_dataset() {
    let doc = render(
        r#"<div class="article-container"
                data-blog-id="42"
                data-blog-status="draft"
                data-blog-author="jane"></div>"#,
    );

    let ctx = bootstrap(&doc).expect("container is present");
    assert_eq!(ctx.id, "42");
    assert_eq!(ctx.status, "draft");
    assert_eq!(ctx.author, "jane");
    assert_eq!(ctx.auth_token, None);
}

#[wasm_bindgen_test]
fn missing_attributes_become_empty_strings() {
    let doc = render(r#"<div class="article-container" data-blog-id="7"></div>"#);

    let ctx = bootstrap(&doc).expect("container is present");
    assert_eq!(ctx.id, "7");
    assert_eq!(ctx.status, "");
    assert_eq!(ctx.author, "");
}

#[wasm_bindgen_test]
fn optional_buttons_do_not_break_bootstrap() {
    // both buttons present; bootstrap attaches listeners without failing
    let doc = render(
        r#"<div class="article-container" data-blog-id="42"></div>
           <button data-action="delete">Delete</button>
           <button data-action="change-status" data-new-status="published">Publish</button>"#,
    );
    assert!(bootstrap(&doc).is_some());
}
