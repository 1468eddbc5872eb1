use axum::response::Redirect;
use axum::Router;

mod blog;
mod items;

async fn root_handler() -> Redirect {
	Redirect::to("/items")
}

pub fn configure() -> Router {
	let mut app = Router::new();
	app = app.route("/", axum::routing::get(root_handler));
	app = app.merge(items::configure());
	app = app.merge(blog::configure());
	app
}
