use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::APP_NAME;
use crate::auth::csrf;
use crate::auth::session::{INSIGHT_KEY, NAME_KEY, ROLE_KEY, get_role};
use crate::errors::{AppError, render};
use crate::models::role::UserRole;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub role: String,
    /// Authority ID / registration ID / shop name, depending on the role.
    /// Collected for the portal form; there is no account backend to check
    /// it against.
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already logged in, redirect to dashboard
    if get_role(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: None,
        app_name: APP_NAME,
        csrf_token,
    };
    render(tmpl)
}

pub async fn login_submit(
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let Some(role) = UserRole::from_code(&form.role) else {
        let csrf_token = csrf::get_or_create_token(&session);
        let tmpl = LoginTemplate {
            error: Some("Please choose a role to continue".to_string()),
            app_name: APP_NAME,
            csrf_token,
        };
        return render(tmpl);
    };

    let display_name = form.identifier.trim();

    session.renew();
    let _ = session.insert(ROLE_KEY, role.code());
    if !display_name.is_empty() {
        let _ = session.insert(NAME_KEY, display_name);
    }
    // A report generated under a previous login is stale.
    session.remove(INSIGHT_KEY);

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish())
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
