use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId};
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::api::with_store;
use crate::helper_model::BookingRequest;
use crate::methods::serialize::serialize_doc;
use crate::methods::standard_replies;
use crate::model;
use crate::store::Store;

pub fn main(store: Store) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store))
        .and_then(|body: BookingRequest, store: Store| async move {
            let car_oid = match ObjectId::parse_str(&body.car_id) {
                Ok(oid) => oid,
                Err(_) => return standard_replies::bad_request("Invalid car id"),
            };
            let car = match store.find_one("car", doc! { "_id": car_oid }).await {
                Ok(car) => car,
                Err(err) => {
                    return standard_replies::internal_server_error_response(format!(
                        "bookings/new: database error looking up car: {}",
                        err
                    ));
                }
            };
            if car.is_none() {
                return standard_replies::not_found("Car not found");
            }

            let booking = model::Booking {
                user_id: body.user_id,
                car_id: body.car_id,
                pickup_location: body.pickup_location,
                dropoff_location: body.dropoff_location,
                start_date: body.start_date,
                end_date: body.end_date,
                total_price: body.total_price,
                status: Default::default(),
                payment_status: Default::default(),
                notes: body.notes,
            };
            if let Err(err) = booking.validate() {
                return standard_replies::bad_request(&err.to_string());
            }

            let mut record = match mongodb::bson::to_document(&booking) {
                Ok(record) => record,
                Err(err) => {
                    return standard_replies::internal_server_error_response(format!(
                        "bookings/new: encoding booking failed: {}",
                        err
                    ));
                }
            };
            record.insert("created_at", Utc::now().to_rfc3339());

            // The car lookup above and this insert are two separate store
            // round trips; a concurrently deleted car can slip between them.
            match store.insert("booking", record.clone()).await {
                Ok(id) => {
                    record.insert("_id", id);
                    standard_replies::response_with_obj(serialize_doc(record), StatusCode::OK)
                }
                Err(err) => standard_replies::internal_server_error_response(format!(
                    "bookings/new: database error inserting booking: {}",
                    err
                )),
            }
        })
}
