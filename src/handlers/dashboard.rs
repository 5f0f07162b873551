use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{Local, Timelike};
use serde::Deserialize;

use crate::auth::session::INSIGHT_KEY;
use crate::errors::{AppError, render};
use crate::insight::AiInsight;
use crate::models::demand::{self, DemandStore};
use crate::models::role::UserRole;
use crate::templates_structs::{DashboardTemplate, DemandCard, PageContext};

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

fn time_greeting(name: &str) -> String {
    let hour = Local::now().hour();
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{}, {}", period, name)
}

pub async fn index(
    store: web::Data<DemandStore>,
    session: Session,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;

    let demands = store.snapshot().await;
    let pipeline = demand::active_pipeline(&demands, &query.q)
        .iter()
        .map(|d| DemandCard::build(d, ctx.role))
        .collect();
    let completed = demand::completed_shops(&demands, &query.q)
        .iter()
        .map(|d| DemandCard::build(d, ctx.role))
        .collect();

    // The strategic report is an Authority-only surface.
    let insight = match ctx.role {
        UserRole::Authority => session.get::<AiInsight>(INSIGHT_KEY).unwrap_or(None),
        UserRole::Student | UserRole::Partner => None,
    };

    let greeting = time_greeting(&ctx.display_name);

    let tmpl = DashboardTemplate {
        ctx,
        greeting,
        query: query.q.clone(),
        pipeline,
        completed,
        insight,
    };
    render(tmpl)
}
