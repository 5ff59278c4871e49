use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Column names of the exported CSV, in output order.
pub const HEADER: [&str; 14] = [
    "_id",
    "key",
    "name",
    "fullName",
    "iata_airport_code",
    "type",
    "country",
    "latitude",
    "longitude",
    "locationId",
    "inEurope",
    "countryCode",
    "coreCountry",
    "distance",
];

/// One location suggestion returned by the suggest endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub full_name: String,
    pub iata_airport_code: String,
    pub kind: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 0 when the service omitted it.
    pub location_id: i64,
    pub in_europe: bool,
    pub country_code: String,
    pub core_country: bool,
    /// 0 when the service omitted it.
    pub distance: i64,
}

/// A placemark rendered as the 14 string fields of a CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow(pub [String; 14]);

impl LocationRow {
    pub fn fields(&self) -> &[String; 14] {
        &self.0
    }
}

/// Field accessors over one JSON object. Every required lookup names the
/// field it failed on so the caller can report it.
struct Fields<'a> {
    index: usize,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn missing(&self, field: &'static str) -> Error {
        Error::MissingField {
            index: self.index,
            field,
        }
    }

    fn required_str(&self, key: &str, field: &'static str) -> Result<String> {
        self.map
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| self.missing(field))
    }

    fn required_i64(&self, key: &str, field: &'static str) -> Result<i64> {
        self.map
            .get(key)
            .and_then(Value::as_i64)
            .ok_or_else(|| self.missing(field))
    }

    fn required_f64(&self, key: &str, field: &'static str) -> Result<f64> {
        self.map
            .get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| self.missing(field))
    }

    fn required_bool(&self, key: &str, field: &'static str) -> Result<bool> {
        self.map
            .get(key)
            .and_then(Value::as_bool)
            .ok_or_else(|| self.missing(field))
    }

    fn required_object(&self, key: &str, field: &'static str) -> Result<Fields<'a>> {
        self.map
            .get(key)
            .and_then(Value::as_object)
            .map(|map| Fields {
                index: self.index,
                map,
            })
            .ok_or_else(|| self.missing(field))
    }

    /// Absent or null reads as "". Non-string scalars use their JSON text.
    fn optional_str(&self, key: &str) -> String {
        match self.map.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Absent, null or unparsable reads as 0. Numeric strings are parsed,
    /// and fractional values truncate toward zero.
    fn optional_i64(&self, key: &str) -> i64 {
        match self.map.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl Placemark {
    /// Read a placemark from element `index` of the response array.
    pub fn from_json(index: usize, value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or(Error::NotAnObject { index })?;
        let fields = Fields { index, map };

        let geo = fields.required_object("geo_position", "geo_position")?;

        Ok(Self {
            id: fields.required_i64("_id", "_id")?,
            key: fields.optional_str("key"),
            name: fields.required_str("name", "name")?,
            full_name: fields.required_str("fullName", "fullName")?,
            iata_airport_code: fields.optional_str("iata_airport_code"),
            kind: fields.required_str("type", "type")?,
            country: fields.required_str("country", "country")?,
            latitude: geo.required_f64("latitude", "geo_position.latitude")?,
            longitude: geo.required_f64("longitude", "geo_position.longitude")?,
            location_id: fields.optional_i64("locationId"),
            in_europe: fields.required_bool("inEurope", "inEurope")?,
            country_code: fields.required_str("countryCode", "countryCode")?,
            core_country: fields.required_bool("coreCountry", "coreCountry")?,
            distance: fields.optional_i64("distance"),
        })
    }

    /// Render in [`HEADER`] order.
    ///
    /// `locationId` and `distance` come out empty when they are 0, so a
    /// missing value and an explicit 0 produce the same column.
    pub fn to_row(&self) -> LocationRow {
        LocationRow([
            self.id.to_string(),
            self.key.clone(),
            self.name.clone(),
            self.full_name.clone(),
            self.iata_airport_code.clone(),
            self.kind.clone(),
            self.country.clone(),
            coordinate_text(self.latitude),
            coordinate_text(self.longitude),
            blank_if_zero(self.location_id),
            self.in_europe.to_string(),
            self.country_code.clone(),
            self.core_country.to_string(),
            blank_if_zero(self.distance),
        ])
    }
}

/// Shortest decimal form, keeping a trailing `.0` on whole numbers.
fn coordinate_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn blank_if_zero(value: i64) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Map every element of the response, or fail on the first one that
/// doesn't map. Never returns a partial list.
pub fn map_rows(values: &[Value]) -> Result<Vec<LocationRow>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Placemark::from_json(index, value).map(|p| p.to_row()))
        .collect()
}
