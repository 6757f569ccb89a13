use mongodb::bson::{Document, doc};
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::api::with_store;
use crate::helper_model::{BookingListParams, ListResponse};
use crate::methods::serialize::serialize_doc;
use crate::methods::standard_replies;
use crate::store::Store;

pub fn main(store: Store) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and(warp::query::<BookingListParams>())
        .and(with_store(store))
        .and_then(|params: BookingListParams, store: Store| async move {
            if !(1..=200).contains(&params.limit) {
                return standard_replies::bad_request("limit must be between 1 and 200");
            }

            let mut filter = Document::new();
            if let Some(user_id) = &params.user_id
                && !user_id.is_empty()
            {
                filter.insert("user_id", user_id.clone());
            }
            // Bookings always come back newest first.
            let sort = doc! { "created_at": -1 };
            match store
                .find("booking", filter, Some(sort), params.limit)
                .await
            {
                Ok(docs) => {
                    let items: Vec<_> = docs.into_iter().map(serialize_doc).collect();
                    let count = items.len();
                    standard_replies::response_with_obj(
                        ListResponse { items, count },
                        StatusCode::OK,
                    )
                }
                Err(err) => standard_replies::internal_server_error_response(format!(
                    "bookings/list: database error: {}",
                    err
                )),
            }
        })
}
