use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{require_role, set_flash};
use crate::errors::{AppError, render};
use crate::models::demand::{DemandStatus, DemandStore};
use crate::models::role::UserRole;
use crate::templates_structs::{PageContext, ReviewFormTemplate};

#[derive(Deserialize)]
pub struct ReviewForm {
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: String,
    pub csrf_token: String,
}

/// GET /demands/{id}/review
/// Renders the review form for a completed service.
pub async fn form(
    store: web::Data<DemandStore>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, UserRole::Student)?;

    let id = path.into_inner();
    let demand = store.find(&id).await.ok_or(AppError::NotFound)?;
    if demand.status != DemandStatus::Completed {
        return Err(AppError::PermissionDenied(
            "Only completed services can be reviewed".to_string(),
        ));
    }

    let ctx = PageContext::build(&session)?;
    let tmpl = ReviewFormTemplate {
        ctx,
        demand_id: demand.id,
        demand_title: demand.title,
        comment: String::new(),
        errors: vec![],
    };
    render(tmpl)
}

/// POST /demands/{id}/review
/// Validates and appends the review, or re-renders the form with errors.
pub async fn submit(
    store: web::Data<DemandStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, UserRole::Student)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let demand = store.find(&id).await.ok_or(AppError::NotFound)?;

    let comment = form.comment.trim();
    let mut errors = vec![];

    match form.rating {
        None => errors.push("Please select a rating".to_string()),
        Some(r) if !(1..=5).contains(&r) => {
            errors.push("Rating must be between 1 and 5".to_string())
        }
        Some(_) => {}
    }
    if comment.is_empty() {
        errors.push("Please describe your experience".to_string());
    }

    let ctx = PageContext::build(&session)?;

    if !errors.is_empty() {
        let tmpl = ReviewFormTemplate {
            ctx,
            demand_id: demand.id,
            demand_title: demand.title,
            comment: comment.to_string(),
            errors,
        };
        return render(tmpl);
    }

    let rating = form.rating.unwrap_or_default();
    store
        .add_review(&id, &ctx.display_name, rating, comment)
        .await?;

    set_flash(&session, "Review submitted successfully");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish())
}
