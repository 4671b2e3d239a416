//! JSON has no NaN: write undefined statistics as `null` and read them back.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(values: &[f64], s: S) -> Result<S::Ok, S::Error> {
    let opt: Vec<Option<f64>> = values.iter().map(|&v| (!v.is_nan()).then_some(v)).collect();
    opt.serialize(s)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
    let opt: Vec<Option<f64>> = Vec::deserialize(d)?;
    Ok(opt.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}
