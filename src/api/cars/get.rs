use mongodb::bson::{doc, oid::ObjectId};
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::api::with_store;
use crate::methods::serialize::serialize_doc;
use crate::methods::standard_replies;
use crate::store::Store;

pub fn main(store: Store) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path::param::<String>()
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store))
        .and_then(|car_id: String, store: Store| async move {
            let oid = match ObjectId::parse_str(&car_id) {
                Ok(oid) => oid,
                Err(_) => return standard_replies::bad_request("Invalid car id"),
            };
            match store.find_one("car", doc! { "_id": oid }).await {
                Ok(Some(car)) => {
                    standard_replies::response_with_obj(serialize_doc(car), StatusCode::OK)
                }
                Ok(None) => standard_replies::not_found("Car not found"),
                Err(err) => standard_replies::internal_server_error_response(format!(
                    "cars/get: database error: {}",
                    err
                )),
            }
        })
}
