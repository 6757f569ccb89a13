use chrono::Utc;
use mongodb::bson::Document;
use serde_json::json;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::api::with_store;
use crate::demo_data;
use crate::methods::standard_replies;
use crate::store::Store;

pub fn main(store: Store) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("seed")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_store(store))
        .and_then(|store: Store| async move {
            if !store.is_connected() {
                return standard_replies::response_with_obj(
                    json!({
                        "status": "no-db",
                        "message": "Database not configured in this environment"
                    }),
                    StatusCode::OK,
                );
            }

            match store.count("car", Document::new()).await {
                Ok(existing) if existing > 0 => standard_replies::response_with_obj(
                    json!({ "status": "ok", "message": "Cars already exist" }),
                    StatusCode::OK,
                ),
                Ok(_) => {
                    let stamp = Utc::now().to_rfc3339();
                    let mut docs = Vec::new();
                    for car in demo_data::seed_cars() {
                        match mongodb::bson::to_document(&car) {
                            Ok(mut doc) => {
                                doc.insert("created_at", stamp.clone());
                                docs.push(doc);
                            }
                            Err(err) => {
                                return standard_replies::internal_server_error_response(format!(
                                    "seed: encoding car failed: {}",
                                    err
                                ));
                            }
                        }
                    }
                    match store.insert_many("car", docs).await {
                        Ok(inserted) => standard_replies::response_with_obj(
                            json!({ "status": "ok", "inserted": inserted }),
                            StatusCode::OK,
                        ),
                        Err(err) => standard_replies::internal_server_error_response(format!(
                            "seed: database error inserting cars: {}",
                            err
                        )),
                    }
                }
                Err(err) => standard_replies::internal_server_error_response(format!(
                    "seed: database error counting cars: {}",
                    err
                )),
            }
        })
}
