use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::csrf;
use crate::auth::session::{INSIGHT_KEY, require_role, set_flash};
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::insight::InsightClient;
use crate::models::demand::DemandStore;
use crate::models::role::UserRole;

/// POST /insights/generate
/// Sends the current demand list to the generative-AI service and keeps the
/// resulting report in the session. Failure becomes a flash alert; the
/// demand store is never touched either way.
pub async fn generate(
    store: web::Data<DemandStore>,
    client: web::Data<InsightClient>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, UserRole::Authority)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let demands = store.snapshot().await;
    match client.generate_report(&demands).await {
        Ok(insight) => {
            let _ = session.insert(INSIGHT_KEY, &insight);
        }
        Err(e) => {
            log::error!("strategic report generation failed: {e}");
            set_flash(
                &session,
                "Error generating report. Please check the AI service configuration.",
            );
        }
    }

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish())
}
