use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Body of `POST /delivery/delivery-orders/cl/_search`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchRequest {
    pub pallet_codes: Vec<String>,
    pub page_number: u32,
    pub page_size: u32,
    pub source_fields: Vec<String>,
}

/// The part of a search response needed to size the full request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct SearchTotal {
    pub total: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DeliveryOrderResult {
    pub total: u32,
    #[serde(default)]
    pub items: Vec<DeliveryOrder>,
}

/// Accept `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Missing or null fields decode to zero, which the
// coordinate filter treats as "no location".
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DeliveryOrder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: Destination,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle_location: i64,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Destination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub geo_location: GeoLocation,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct GeoLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_search_request() {
        let req = SearchRequest {
            pallet_codes: vec!["pl1".into(), "pl2".into()],
            page_number: 0,
            page_size: 1,
            source_fields: vec!["vehicle_location".into()],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"pallet_codes":["pl1","pl2"],"page_number":0,"page_size":1,"source_fields":["vehicle_location"]}"#
        );
    }

    #[test]
    fn deserialize_total_only() {
        let res: SearchTotal = serde_json::from_str(r#"{"total":42,"items":[{}]}"#).unwrap();
        assert_eq!(res.total, 42);
    }

    #[test]
    fn deserialize_items_with_missing_fields() {
        let json = r#"{
            "total": 2,
            "items": [
                {"destination": {"geo_location": {"lat": -33.45, "lon": -70.66}}, "vehicle_location": 7},
                {"vehicle_location": 3}
            ]
        }"#;
        let res: DeliveryOrderResult = serde_json::from_str(json).unwrap();
        assert_eq!(res.items.len(), 2);
        assert_eq!(res.items[0].vehicle_location, 7);
        assert_eq!(res.items[0].destination.geo_location.lat, -33.45);
        assert_eq!(res.items[1].destination.geo_location.lat, 0.0);
        assert_eq!(res.items[1].destination.geo_location.lon, 0.0);
    }

    #[test]
    fn deserialize_null_fields_as_zero() {
        let json = r#"{
            "total": 3,
            "items": [
                {"destination": null, "vehicle_location": null},
                {"destination": {"geo_location": null}, "vehicle_location": 2},
                {"destination": {"geo_location": {"lat": null, "lon": -70.66}}, "vehicle_location": 3}
            ]
        }"#;
        let res: DeliveryOrderResult = serde_json::from_str(json).unwrap();
        assert_eq!(res.items.len(), 3);
        assert_eq!(res.items[0].vehicle_location, 0);
        assert_eq!(res.items[0].destination.geo_location.lat, 0.0);
        assert_eq!(res.items[1].vehicle_location, 2);
        assert_eq!(res.items[1].destination.geo_location.lon, 0.0);
        assert_eq!(res.items[2].destination.geo_location.lat, 0.0);
        assert_eq!(res.items[2].destination.geo_location.lon, -70.66);
    }
}
