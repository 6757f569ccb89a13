pub mod car_query;
pub mod serialize;
pub mod standard_replies;
