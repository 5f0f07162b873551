use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::csrf;
use crate::auth::session::{current_role, require_role, set_flash};
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::demand::{DemandStatus, DemandStore};
use crate::models::role::UserRole;

fn back_to_dashboard() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// Voting is a Student affordance and closes once a demand is fulfilled.
/// The counters themselves are unconditional; this gate lives here.
async fn votable(store: &DemandStore, id: &str) -> bool {
    match store.find(id).await {
        Some(d) => d.status != DemandStatus::Completed,
        None => false,
    }
}

/// POST /demands/{id}/upvote
pub async fn upvote(
    store: web::Data<DemandStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, UserRole::Student)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    if votable(&store, &id).await {
        store.upvote(&id).await;
    }
    Ok(back_to_dashboard())
}

/// POST /demands/{id}/downvote
pub async fn downvote(
    store: web::Data<DemandStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, UserRole::Student)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    if votable(&store, &id).await {
        store.downvote(&id).await;
    }
    Ok(back_to_dashboard())
}

/// POST /demands/{id}/advance
/// Applies the single pipeline transition the logged-in role may perform;
/// any other (role, status) combination leaves the demand unchanged.
pub async fn advance(
    store: web::Data<DemandStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let role = current_role(&session)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    match store.advance(&id, role).await {
        Some(new_status) => {
            set_flash(&session, &format!("Demand moved to {}", new_status.label()));
        }
        None => {
            log::debug!("no transition for {} as {}", id, role.code());
        }
    }
    Ok(back_to_dashboard())
}
