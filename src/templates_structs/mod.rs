// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::config::SiteSettings;
use crate::models::user::UserIdentity;

/// Common context shared by all signed-in pages.
pub struct PageContext {
    pub username: String,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, site: &SiteSettings, leader: &UserIdentity) -> Self {
        let username = if leader.display_name.is_empty() {
            leader.username.clone()
        } else {
            leader.display_name.clone()
        };
        let avatar_initial = username.chars().next().unwrap_or('?').to_uppercase().to_string();
        Self {
            username,
            avatar_initial,
            flash: take_flash(session),
            app_name: site.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}

mod common;
mod dashboard;
mod group;

pub use common::*;
pub use dashboard::*;
pub use group::*;
