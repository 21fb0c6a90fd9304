use askama::Template;

/// Common context shared by all admin pages.
/// Templates access these as `ctx.app_name`, `ctx.current_path`.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
}

impl PageContext {
    pub fn new(app_name: &str, current_path: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            current_path: current_path.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}
