// Browser front-end
// Server-rendered form page and its submit handler, backed by the same session as the API.

pub mod handlers;
pub mod page;
