//! Click-driven admin actions: delete the article, change its status.

use gloo_dialogs::alert;
use gloo_net::http::Method;
use log::{error, info};
use serde_json::Value;

use crate::api::send_json;
use crate::article::{article_path, status_path, ArticleContext};

/* Listing page shown after a successful delete */
const BLOG_LIST_PATH: &str = "/blogs/";

/// DELETE the article, then leave for the listing page.
///
/// Failure is logged only, with no dialog. The status-change flow alerts
/// on failure and this one historically does not; kept as-is.
pub async fn delete_article(ctx: &ArticleContext) {
    let path = article_path(&ctx.id);
    match send_json::<(), Value>(Method::DELETE, &path, None, ctx.auth_token.as_deref()).await {
        Ok(_) => {
            info!("blog {} deleted", ctx.id);
            alert("Blog successfully deleted. Redirecting...");
            redirect_to(BLOG_LIST_PATH);
        }
        Err(e) => error!("Failed to delete the blog: {e}"),
    }
}

/// PATCH the article's status, then reload the page so the server-rendered
/// view reflects it.
pub async fn change_status(ctx: &ArticleContext, new_status: &str) {
    let path = status_path(&ctx.id, new_status);
    match send_json::<(), Value>(Method::PATCH, &path, None, ctx.auth_token.as_deref()).await {
        Ok(_) => {
            info!("blog {} status set to {new_status}", ctx.id);
            alert("Status successfully updated. The page will be refreshed.");
            reload();
        }
        Err(e) => {
            error!("Failed to change the blog status: {e}");
            alert("Error updating blog status. Please try again.");
        }
    }
}

fn redirect_to(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(path) {
            error!("redirect to {path} failed: {e:?}");
        }
    }
}

fn reload() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            error!("page reload failed: {e:?}");
        }
    }
}
