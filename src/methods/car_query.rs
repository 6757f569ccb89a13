use mongodb::bson::{Bson, Document};

use crate::helper_model::CarListParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    Popularity,
    Newest,
}

impl SortKey {
    /// Unknown sort names are ignored rather than rejected, matching the
    /// permissive behavior the listing endpoint has always had.
    pub fn parse(raw: &str) -> Option<SortKey> {
        match raw {
            "price_asc" => Some(SortKey::PriceAsc),
            "price_desc" => Some(SortKey::PriceDesc),
            "popularity" => Some(SortKey::Popularity),
            "newest" => Some(SortKey::Newest),
            _ => None,
        }
    }

    pub fn order(self) -> (&'static str, i32) {
        match self {
            SortKey::PriceAsc => ("price_per_day", 1),
            SortKey::PriceDesc => ("price_per_day", -1),
            SortKey::Popularity => ("popularity", -1),
            SortKey::Newest => ("created_at", -1),
        }
    }
}

/// A single per-field condition. Absent filters are simply not recorded,
/// so an unfiltered query renders as the empty document, never as a
/// "match all" placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equals(Bson),
    Range {
        gte: Option<Bson>,
        lte: Option<Bson>,
    },
}

impl Predicate {
    fn to_bson(&self) -> Bson {
        match self {
            Predicate::Equals(value) => value.clone(),
            Predicate::Range { gte, lte } => {
                let mut range = Document::new();
                if let Some(min) = gte {
                    range.insert("$gte", min.clone());
                }
                if let Some(max) = lte {
                    range.insert("$lte", max.clone());
                }
                Bson::Document(range)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarQuery {
    predicates: Vec<(&'static str, Predicate)>,
    sort: Option<SortKey>,
    limit: i64,
}

impl CarQuery {
    /// Expects params that already passed the endpoint's range validation;
    /// the builder itself never fails.
    pub fn from_params(params: &CarListParams) -> CarQuery {
        let mut predicates = Vec::new();
        for (field, value) in [
            ("type", &params.body_type),
            ("brand", &params.brand),
            ("transmission", &params.transmission),
            ("fuel_type", &params.fuel_type),
        ] {
            if let Some(value) = value
                && !value.is_empty()
            {
                predicates.push((field, Predicate::Equals(Bson::String(value.clone()))));
            }
        }
        if let Some(seats) = params.seats_gte {
            predicates.push((
                "seats",
                Predicate::Range {
                    gte: Some(Bson::Int64(seats)),
                    lte: None,
                },
            ));
        }
        if params.min_price.is_some() || params.max_price.is_some() {
            predicates.push((
                "price_per_day",
                Predicate::Range {
                    gte: params.min_price.map(Bson::Double),
                    lte: params.max_price.map(Bson::Double),
                },
            ));
        }
        let sort = params.sort.as_deref().and_then(SortKey::parse);
        CarQuery {
            predicates,
            sort,
            limit: params.limit,
        }
    }

    pub fn filter(&self) -> Document {
        let mut filter = Document::new();
        for (field, predicate) in &self.predicates {
            filter.insert(*field, predicate.to_bson());
        }
        filter
    }

    pub fn sort(&self) -> Option<Document> {
        self.sort.map(|key| {
            let (field, direction) = key.order();
            let mut sort = Document::new();
            sort.insert(field, direction);
            sort
        })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn empty_params() -> CarListParams {
        CarListParams {
            body_type: None,
            brand: None,
            transmission: None,
            fuel_type: None,
            seats_gte: None,
            min_price: None,
            max_price: None,
            sort: None,
            limit: 50,
        }
    }

    #[test]
    fn no_params_renders_empty_filter() {
        let query = CarQuery::from_params(&empty_params());
        assert_eq!(query.filter(), Document::new());
        assert_eq!(query.sort(), None);
        assert_eq!(query.limit(), 50);
    }

    #[test]
    fn exact_match_filters_are_conjoined() {
        let params = CarListParams {
            body_type: Some(String::from("suv")),
            brand: Some(String::from("BMW")),
            transmission: Some(String::from("automatic")),
            fuel_type: Some(String::from("hybrid")),
            ..empty_params()
        };
        let filter = CarQuery::from_params(&params).filter();
        assert_eq!(
            filter,
            doc! {
                "type": "suv",
                "brand": "BMW",
                "transmission": "automatic",
                "fuel_type": "hybrid",
            }
        );
    }

    #[test]
    fn empty_string_filters_are_dropped() {
        let params = CarListParams {
            brand: Some(String::new()),
            ..empty_params()
        };
        assert_eq!(CarQuery::from_params(&params).filter(), Document::new());
    }

    #[test]
    fn seats_gte_becomes_open_ended_range() {
        let params = CarListParams {
            seats_gte: Some(4),
            ..empty_params()
        };
        let filter = CarQuery::from_params(&params).filter();
        assert_eq!(filter, doc! { "seats": { "$gte": 4_i64 } });
    }

    #[test]
    fn price_bounds_share_one_range_predicate() {
        let params = CarListParams {
            min_price: Some(40.0),
            max_price: Some(120.0),
            ..empty_params()
        };
        let filter = CarQuery::from_params(&params).filter();
        assert_eq!(
            filter,
            doc! { "price_per_day": { "$gte": 40.0, "$lte": 120.0 } }
        );
    }

    #[test]
    fn lone_max_price_omits_gte() {
        let params = CarListParams {
            max_price: Some(120.0),
            ..empty_params()
        };
        let filter = CarQuery::from_params(&params).filter();
        assert_eq!(filter, doc! { "price_per_day": { "$lte": 120.0 } });
    }

    #[test]
    fn sort_names_map_to_field_and_direction() {
        for (name, field, direction) in [
            ("price_asc", "price_per_day", 1),
            ("price_desc", "price_per_day", -1),
            ("popularity", "popularity", -1),
            ("newest", "created_at", -1),
        ] {
            let params = CarListParams {
                sort: Some(String::from(name)),
                ..empty_params()
            };
            let sort = CarQuery::from_params(&params).sort().unwrap();
            let mut expected = Document::new();
            expected.insert(field, direction);
            assert_eq!(sort, expected, "sort={}", name);
        }
    }

    #[test]
    fn unknown_sort_is_silently_ignored() {
        let params = CarListParams {
            sort: Some(String::from("mileage_desc")),
            ..empty_params()
        };
        assert_eq!(CarQuery::from_params(&params).sort(), None);
    }
}
