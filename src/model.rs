use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Sedan,
    Suv,
    Coupe,
    Hatchback,
    Convertible,
    Truck,
    Van,
    Wagon,
    Sport,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Automatic,
    Manual,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    Stripe,
    Cash,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentState {
    #[default]
    Initiated,
    Succeeded,
    Failed,
    Refunded,
}

/// One rentable car. Stored as a document in the `car` collection; the
/// store assigns `_id` on insert, so the struct itself carries no id field.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Car {
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub body_type: BodyType,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: u8,
    #[serde(default = "default_luggage")]
    pub luggage: u8,
    #[serde(default)]
    pub mileage: u32,
    pub price_per_day: f64,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_luggage() -> u8 {
    2
}

fn default_available() -> bool {
    true
}

impl Car {
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !(1..=9).contains(&self.seats) {
            return Err(SchemaError::OutOfRange {
                field: "seats",
                min: 1,
                max: 9,
            });
        }
        if self.luggage > 10 {
            return Err(SchemaError::OutOfRange {
                field: "luggage",
                min: 0,
                max: 10,
            });
        }
        if self.price_per_day < 0.0 {
            return Err(SchemaError::Negative {
                field: "price_per_day",
            });
        }
        Ok(())
    }
}

/// A reservation of one car by one user. The referenced ids are kept as
/// plain strings; the only referential check is the car lookup performed
/// by the create endpoint. Dates stay as ISO `YYYY-MM-DD` strings and are
/// never parsed or order-checked here.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Booking {
    pub user_id: String,
    pub car_id: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Booking {
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.total_price < 0.0 {
            return Err(SchemaError::Negative {
                field: "total_price",
            });
        }
        Ok(())
    }
}

// The remaining collections have schemas only. No endpoint reads or
// writes them yet; they pin down the document shapes for later work.

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct Review {
    pub car_id: String,
    pub user_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Review {
    #[allow(dead_code)]
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !(1..=5).contains(&self.rating) {
            return Err(SchemaError::OutOfRange {
                field: "rating",
                min: 1,
                max: 5,
            });
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct Payment {
    pub booking_id: String,
    pub amount: f64,
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(default)]
    pub status: PaymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl Payment {
    #[allow(dead_code)]
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.amount < 0.0 {
            return Err(SchemaError::Negative { field: "amount" });
        }
        Ok(())
    }
}
