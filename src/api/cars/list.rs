use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::api::with_store;
use crate::helper_model::{CarListParams, ListResponse};
use crate::methods::car_query::CarQuery;
use crate::methods::serialize::serialize_doc;
use crate::methods::standard_replies;
use crate::store::Store;

pub fn main(store: Store) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and(warp::query::<CarListParams>())
        .and(with_store(store))
        .and_then(|params: CarListParams, store: Store| async move {
            if let Some(seats) = params.seats_gte
                && !(1..=9).contains(&seats)
            {
                return standard_replies::bad_request("seats_gte must be between 1 and 9");
            }
            if params.min_price.is_some_and(|price| price < 0.0) {
                return standard_replies::bad_request("min_price must not be negative");
            }
            if params.max_price.is_some_and(|price| price < 0.0) {
                return standard_replies::bad_request("max_price must not be negative");
            }
            if !(1..=200).contains(&params.limit) {
                return standard_replies::bad_request("limit must be between 1 and 200");
            }

            let query = CarQuery::from_params(&params);
            match store
                .find("car", query.filter(), query.sort(), query.limit())
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
                    "cars/list: database error: {}",
                    err
                )),
            }
        })
}
