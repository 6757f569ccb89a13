mod api;
mod demo_data;
mod helper_model;
mod methods;
mod model;
mod store;

use env_logger::Env;
use warp::Filter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let store = store::Store::init().await;

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(8000);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["content-type"]);

    // routing for the server
    let httpd = api::routes(store)
        .with(cors)
        .with(warp::log("carhub_httpd"));
    log::info!("listening on 0.0.0.0:{}", port);
    warp::serve(httpd).run(([0, 0, 0, 0], port)).await;
}
