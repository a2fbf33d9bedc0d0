use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
    pub username: String,
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub app_name: String,
    pub signed_in: bool,
}
