use askama::Template;

#[derive(Template)]
#[template(path = "review_form.html")]
pub struct ReviewFormTemplate {
    pub ctx: super::PageContext,
    pub demand_id: String,
    pub demand_title: String,
    pub comment: String,
    pub errors: Vec<String>,
}
