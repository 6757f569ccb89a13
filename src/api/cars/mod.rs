mod get;
mod list;

use warp::Filter;

use crate::store::Store;

pub fn api_cars(
    store: Store,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("cars").and(list::main(store.clone()).or(get::main(store)))
}
