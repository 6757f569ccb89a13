//! Fixed documents served when no database is configured, plus the three
//! cars that `POST /api/seed` inserts. Fallback documents already carry a
//! string `id` (there is no store to assign `_id`), which keeps them
//! shape-identical to serialized persisted records.

use mongodb::bson::{Bson, Document, doc};

use crate::methods::serialize;
use crate::model::{BodyType, Car, FuelType, Transmission};

pub fn find(collection: &str, limit: i64) -> Vec<Document> {
    let items = match collection {
        "car" => demo_cars(),
        "booking" => demo_bookings(),
        _ => Vec::new(),
    };
    items.into_iter().take(limit.max(0) as usize).collect()
}

pub fn find_one(collection: &str, filter: &Document) -> Option<Document> {
    match collection {
        "car" => {
            let id = filter
                .get("_id")
                .map(serialize::id_string)
                .unwrap_or_else(|| String::from("demo-1"));
            Some(demo_car(&id))
        }
        "booking" => demo_bookings().into_iter().next(),
        _ => None,
    }
}

pub fn placeholder_id(collection: &str) -> Bson {
    Bson::String(format!("demo-{}-123", collection))
}

fn demo_cars() -> Vec<Document> {
    vec![
        doc! {
            "id": "demo-1",
            "brand": "Tesla",
            "model": "Model 3",
            "type": "sedan",
            "transmission": "automatic",
            "fuel_type": "electric",
            "seats": 5,
            "luggage": 3,
            "mileage": 12000,
            "price_per_day": 89.0,
            "popularity": 98,
            "images": [
                "https://images.unsplash.com/photo-1511390420183-3a2c5a36f3f1?q=80&w=1200&auto=format&fit=crop"
            ],
            "features": ["Autopilot", "Bluetooth", "A/C"],
            "available": true,
            "description": "Sleek EV with long range and premium comfort.",
        },
        doc! {
            "id": "demo-2",
            "brand": "BMW",
            "model": "X5",
            "type": "suv",
            "transmission": "automatic",
            "fuel_type": "hybrid",
            "seats": 5,
            "luggage": 4,
            "mileage": 24000,
            "price_per_day": 129.0,
            "popularity": 92,
            "images": [
                "https://images.unsplash.com/photo-1619767886558-efdc259cde1c?q=80&w=1200&auto=format&fit=crop"
            ],
            "features": ["Panoramic Roof", "Leather", "GPS"],
            "available": true,
            "description": "Luxury SUV perfect for family trips.",
        },
    ]
}

fn demo_car(id: &str) -> Document {
    doc! {
        "id": id,
        "brand": "Tesla",
        "model": "Model 3 Performance",
        "type": "sedan",
        "transmission": "automatic",
        "fuel_type": "electric",
        "seats": 5,
        "luggage": 3,
        "mileage": 12000,
        "price_per_day": 99.0,
        "popularity": 99,
        "images": [
            "https://images.unsplash.com/photo-1511390420183-3a2c5a36f3f1?q=80&w=1200&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1549921296-3c2b3f6b33b5?q=80&w=1200&auto=format&fit=crop"
        ],
        "features": ["Autopilot", "Heated Seats", "Premium Audio"],
        "available": true,
        "description": "Performance EV with thrilling acceleration.",
        "reviews": [
            { "user": "Alex", "rating": 5, "comment": "Amazing ride!" },
            { "user": "Sam", "rating": 4, "comment": "Very comfortable." }
        ],
    }
}

fn demo_bookings() -> Vec<Document> {
    vec![doc! {
        "id": "demo-book-1",
        "user_id": "u1",
        "car_id": "demo-1",
        "pickup_location": "Downtown",
        "dropoff_location": "Airport",
        "start_date": "2025-12-01",
        "end_date": "2025-12-05",
        "total_price": 356.0,
        "status": "confirmed",
        "payment_status": "paid",
    }]
}

pub fn seed_cars() -> Vec<Car> {
    vec![
        Car {
            brand: String::from("Tesla"),
            model: String::from("Model 3"),
            body_type: BodyType::Sedan,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Electric,
            seats: 5,
            luggage: 3,
            mileage: 12000,
            price_per_day: 89.0,
            popularity: 98,
            images: vec![String::from(
                "https://images.unsplash.com/photo-1511390420183-3a2c5a36f3f1?q=80&w=1200&auto=format&fit=crop",
            )],
            features: vec![
                String::from("Autopilot"),
                String::from("Bluetooth"),
                String::from("A/C"),
            ],
            available: true,
            description: Some(String::from(
                "Sleek EV with long range and premium comfort.",
            )),
        },
        Car {
            brand: String::from("BMW"),
            model: String::from("X5"),
            body_type: BodyType::Suv,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Hybrid,
            seats: 5,
            luggage: 4,
            mileage: 24000,
            price_per_day: 129.0,
            popularity: 92,
            images: vec![String::from(
                "https://images.unsplash.com/photo-1619767886558-efdc259cde1c?q=80&w=1200&auto=format&fit=crop",
            )],
            features: vec![
                String::from("Panoramic Roof"),
                String::from("Leather"),
                String::from("GPS"),
            ],
            available: true,
            description: Some(String::from("Luxury SUV perfect for family trips.")),
        },
        Car {
            brand: String::from("Toyota"),
            model: String::from("Corolla"),
            body_type: BodyType::Sedan,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Petrol,
            seats: 5,
            luggage: 3,
            mileage: 40000,
            price_per_day: 49.0,
            popularity: 85,
            images: vec![String::from(
                "https://images.unsplash.com/photo-1549921296-3c2b3f6b33b5?q=80&w=1200&auto=format&fit=crop",
            )],
            features: vec![
                String::from("Great MPG"),
                String::from("A/C"),
                String::from("USB"),
            ],
            available: true,
            description: Some(String::from("Reliable and efficient daily driver.")),
        },
    ]
}
