use actix_session::Session;

use crate::errors::AppError;
use crate::models::role::UserRole;

// Session keys. The signed cookie is the only durable store this
// application has; the role under ROLE_KEY is what makes a session active.
pub const ROLE_KEY: &str = "role";
pub const NAME_KEY: &str = "display_name";
pub const INSIGHT_KEY: &str = "insight";

pub fn get_role(session: &Session) -> Option<UserRole> {
    session
        .get::<String>(ROLE_KEY)
        .unwrap_or(None)
        .and_then(|code| UserRole::from_code(&code))
}

/// Display name captured at login. Falls back to the role's portal title
/// when the visitor left the identifier blank.
pub fn get_display_name(session: &Session, role: UserRole) -> String {
    session
        .get::<String>(NAME_KEY)
        .unwrap_or(None)
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| role.label().to_string())
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

/// The logged-in role, or a session error that redirects to the portal.
pub fn current_role(session: &Session) -> Result<UserRole, AppError> {
    get_role(session).ok_or_else(|| AppError::Session("No role in session".to_string()))
}

/// Gate a handler to exactly one role.
pub fn require_role(session: &Session, role: UserRole) -> Result<(), AppError> {
    match current_role(session)? {
        r if r == role => Ok(()),
        r => Err(AppError::PermissionDenied(format!(
            "{} action attempted by {}",
            role.label(),
            r.label()
        ))),
    }
}
