//! One-shot page bootstrap: find the article container, read its metadata,
//! wire whichever admin buttons the page rendered.

use gloo_dialogs::confirm;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::actions::{change_status, delete_article};
use crate::article::ArticleContext;
use crate::utils::{get_cookie, ACCESS_TOKEN_COOKIE};

const CONTAINER_SELECTOR: &str = ".article-container";
const DELETE_SELECTOR: &str = r#"[data-action="delete"]"#;
const STATUS_SELECTOR: &str = r#"[data-action="change-status"]"#;

/// Runs `bootstrap` now, or on `DOMContentLoaded` when the document is
/// still loading (the module may be instantiated from a `<head>` script).
pub fn bootstrap_when_ready(document: &Document) {
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let once = Closure::once(move || {
            bootstrap(&doc);
        });
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())
        {
            error!("failed to wait for DOMContentLoaded: {e:?}");
            return;
        }
        once.forget();
    } else {
        bootstrap(document);
    }
}

/// Reads the article metadata and attaches the admin click handlers.
/// Returns the assembled context, or `None` when the page has no article
/// container — that page simply gets no admin controls.
pub fn bootstrap(document: &Document) -> Option<ArticleContext> {
    let Some(container) = query(document, CONTAINER_SELECTOR) else {
        error!("Element {CONTAINER_SELECTOR} not found. Make sure it is present in the DOM.");
        return None;
    };

    let ctx = context_from(&container);
    info!("article context: {ctx:?}");

    if let Some(button) = query(document, DELETE_SELECTOR) {
        attach_delete(&button, ctx.clone());
    }
    if let Some(button) = query(document, STATUS_SELECTOR) {
        attach_change_status(&button, ctx.clone());
    }

    Some(ctx)
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn context_from(container: &HtmlElement) -> ArticleContext {
    let data = container.dataset();
    ArticleContext::new(
        data.get("blogId"),
        data.get("blogStatus"),
        data.get("blogAuthor"),
        get_cookie(ACCESS_TOKEN_COOKIE),
    )
}

fn attach_delete(button: &HtmlElement, ctx: ArticleContext) {
    on_click(button, move || {
        if confirm("Are you sure you want to delete this blog?") {
            let ctx = ctx.clone();
            spawn_local(async move {
                delete_article(&ctx).await;
            });
        }
    });
}

fn attach_change_status(button: &HtmlElement, ctx: ArticleContext) {
    let source = button.clone();
    on_click(button, move || {
        // dataset is re-read at click time so a swapped attribute takes effect
        let new_status = source.dataset().get("newStatus").unwrap_or_default();
        let ctx = ctx.clone();
        spawn_local(async move {
            change_status(&ctx, &new_status).await;
        });
    });
}

/// Binds a click listener for the lifetime of the element. The closure is
/// leaked; the browser drops the listener together with the element.
fn on_click<F>(element: &HtmlElement, handler: F)
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Err(e) =
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        error!("failed to attach click listener: {e:?}");
        return;
    }
    closure.forget();
}
