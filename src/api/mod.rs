mod bookings;
mod cars;
mod diagnostics;
mod seed;

use std::convert::Infallible;

use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::helper_model;
use crate::store::Store;

pub fn routes(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let api = warp::path("api").and(
        cars::api_cars(store.clone())
            .or(bookings::api_bookings(store.clone()))
            .or(seed::main(store.clone())),
    );
    root()
        .or(api)
        .or(diagnostics::main(store))
        .recover(handle_rejection)
}

fn root() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path::end().and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({ "message": "Car Rental Backend Running" }))
    })
}

pub(crate) fn with_store(
    store: Store,
) -> impl Filter<Extract = (Store,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

/// Maps warp's built-in rejections onto the same JSON error bodies the
/// handlers produce.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, title, message) = if err.is_not_found() {
        (
            StatusCode::NOT_FOUND,
            "Not Found",
            String::from("No such route."),
        )
    } else if let Some(err) = err.find::<warp::reject::InvalidQuery>() {
        (
            StatusCode::BAD_REQUEST,
            "Bad Request",
            err.to_string(),
        )
    } else if let Some(err) = err.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, "Bad Request", err.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
            String::from("This route does not accept that method."),
        )
    } else {
        log::error!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            String::from("Please try again later."),
        )
    };
    let msg = helper_model::ErrorResponse {
        title: String::from(title),
        message,
    };
    Ok(warp::reply::with_status(warp::reply::json(&msg), status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::Value;

    fn demo_routes() -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
        routes(Store::Unavailable)
    }

    async fn get_json(path: &str) -> (StatusCode, Value) {
        let res = warp::test::request()
            .path(path)
            .reply(&demo_routes())
            .await;
        let body = serde_json::from_slice(res.body()).unwrap_or(Value::Null);
        (res.status(), body)
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Car Rental Backend Running");
    }

    #[tokio::test]
    async fn unknown_route_is_404_json() {
        let (status, body) = get_json("/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["title"], "Not Found");
    }

    #[tokio::test]
    async fn wrong_method_is_405_json() {
        let res = warp::test::request()
            .method("DELETE")
            .path("/api/cars")
            .reply(&demo_routes())
            .await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn list_cars_serves_demo_items() {
        let (status, body) = get_json("/api/cars").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert!(item["id"].is_string());
        }
    }

    #[tokio::test]
    async fn list_cars_limit_caps_count() {
        let (status, body) = get_json("/api/cars?limit=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_cars_rejects_out_of_range_params() {
        for path in [
            "/api/cars?limit=0",
            "/api/cars?limit=201",
            "/api/cars?seats_gte=0",
            "/api/cars?seats_gte=10",
            "/api/cars?min_price=-1",
            "/api/cars?max_price=-0.5",
        ] {
            let (status, body) = get_json(path).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "path={}", path);
            assert_eq!(body["title"], "Bad Request", "path={}", path);
        }
    }

    #[tokio::test]
    async fn list_cars_rejects_unparsable_query() {
        let (status, _) = get_json("/api/cars?seats_gte=five").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_car_rejects_malformed_id() {
        let (status, body) = get_json("/api/cars/not-an-object-id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid car id");
    }

    #[tokio::test]
    async fn get_car_echoes_well_formed_id_in_demo_mode() {
        let oid = ObjectId::new().to_hex();
        let (status, body) = get_json(&format!("/api/cars/{}", oid)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], oid.as_str());
        assert_eq!(body["brand"], "Tesla");
    }

    fn booking_payload(car_id: &str) -> Value {
        serde_json::json!({
            "user_id": "u1",
            "car_id": car_id,
            "pickup_location": "Downtown",
            "dropoff_location": "Airport",
            "start_date": "2025-12-01",
            "end_date": "2025-12-05",
            "total_price": 356.0
        })
    }

    #[tokio::test]
    async fn create_booking_rejects_malformed_car_id() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/bookings")
            .json(&booking_payload("nope"))
            .reply(&demo_routes())
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_booking_echoes_fields_with_assigned_id() {
        let car_id = ObjectId::new().to_hex();
        let res = warp::test::request()
            .method("POST")
            .path("/api/bookings")
            .json(&booking_payload(&car_id))
            .reply(&demo_routes())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["id"], "demo-booking-123");
        assert_eq!(body["status"], "pending");
        assert_eq!(body["payment_status"], "unpaid");
        assert_eq!(body["car_id"], car_id.as_str());
        assert_eq!(body["pickup_location"], "Downtown");
        assert_eq!(body["total_price"], 356.0);
    }

    #[tokio::test]
    async fn create_booking_rejects_negative_total_price() {
        let mut payload = booking_payload(&ObjectId::new().to_hex());
        payload["total_price"] = serde_json::json!(-10.0);
        let res = warp::test::request()
            .method("POST")
            .path("/api/bookings")
            .json(&payload)
            .reply(&demo_routes())
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_booking_rejects_malformed_body() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/bookings")
            .body("{not json")
            .header("content-type", "application/json")
            .reply(&demo_routes())
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_bookings_serves_demo_items() {
        let (status, body) = get_json("/api/bookings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"][0]["id"], "demo-book-1");
    }

    #[tokio::test]
    async fn list_bookings_rejects_out_of_range_limit() {
        let (status, _) = get_json("/api/bookings?limit=500").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn seed_without_database_reports_no_db() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/seed")
            .reply(&demo_routes())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["status"], "no-db");
    }

    #[tokio::test]
    async fn diagnostics_reports_fallback_mode() {
        let (status, body) = get_json("/test").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "✅ Running");
        assert_eq!(body["database"], "❌ Not Configured");
        assert_eq!(body["connection_status"], "Not Connected");
        assert!(body["collections"].as_array().unwrap().is_empty());
    }
}
