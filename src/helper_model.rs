use mongodb::bson::Document;
use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub title: String,
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BookingRequest {
    pub user_id: String,
    pub car_id: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CarListParams {
    #[serde(rename = "type")]
    pub body_type: Option<String>,
    pub brand: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub seats_gte: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BookingListParams {
    pub user_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub fn default_limit() -> i64 {
    50
}

#[derive(Serialize, Debug, Clone)]
pub struct ListResponse {
    pub items: Vec<Document>,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct DiagnosticsReply {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
