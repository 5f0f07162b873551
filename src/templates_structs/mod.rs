// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::APP_NAME;
use crate::auth::csrf;
use crate::auth::session::{current_role, get_display_name, take_flash};
use crate::errors::AppError;
use crate::models::role::UserRole;

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.display_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub role: UserRole,
    pub display_name: String,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub app_name: &'static str,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let role = current_role(session)?;
        let display_name = get_display_name(session, role);
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let avatar_initial = display_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        Ok(Self {
            role,
            display_name,
            avatar_initial,
            flash,
            app_name: APP_NAME,
            csrf_token,
        })
    }

    pub fn role_label(&self) -> &'static str {
        self.role.label()
    }

    pub fn headline(&self) -> &'static str {
        self.role.headline()
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    pub fn is_authority(&self) -> bool {
        self.role == UserRole::Authority
    }

    pub fn is_partner(&self) -> bool {
        self.role == UserRole::Partner
    }
}

mod common;
mod dashboard;
mod review;

pub use common::LoginTemplate;
pub use dashboard::{DashboardTemplate, DemandCard};
pub use review::ReviewFormTemplate;
