mod list;
mod new;

use warp::Filter;

use crate::store::Store;

pub fn api_bookings(
    store: Store,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("bookings").and(new::main(store.clone()).or(list::main(store)))
}
