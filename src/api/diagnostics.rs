use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::api::with_store;
use crate::helper_model::DiagnosticsReply;
use crate::methods::standard_replies;
use crate::store::Store;

fn env_flag(name: &str) -> String {
    if std::env::var(name).is_ok() {
        String::from("✅ Set")
    } else {
        String::from("❌ Not Set")
    }
}

pub fn main(store: Store) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("test")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store))
        .and_then(|store: Store| async move {
            let diag = store.probe().await;
            let database = if !diag.connected {
                String::from("❌ Not Configured")
            } else if let Some(err) = &diag.error {
                format!("⚠️ Connected but Error: {}", err)
            } else {
                String::from("✅ Connected & Working")
            };
            let connection_status = if diag.connected {
                String::from("Connected")
            } else {
                String::from("Not Connected")
            };
            let reply = DiagnosticsReply {
                backend: String::from("✅ Running"),
                database,
                database_url: env_flag("DATABASE_URL"),
                database_name: env_flag("DATABASE_NAME"),
                connection_status,
                collections: diag.collections,
            };
            standard_replies::response_with_obj(reply, StatusCode::OK)
        })
}
