use serde::{Deserialize, Deserializer, Serialize};

// package
//  ├── packageId
//  ├── durationDays
//  └── prices[]
//       ├── type
//       ├── price
//       ├── limitPost        (absent = unlimited)
//       ├── serviceDetailId
//       └── priceId          (optional)

/// One billing period offered by a landlord, carrying every tier's price for that period.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    #[serde(deserialize_with = "opaque_id")]
    pub package_id: String,
    pub duration_days: u32,
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: u64,
    #[serde(default)]
    pub limit_post: Option<u32>,
    #[serde(deserialize_with = "opaque_id")]
    pub service_detail_id: String,
    #[serde(default, deserialize_with = "opaque_id_opt")]
    pub price_id: Option<String>,
}

/// The backend is not consistent about ids: some are numbers, some strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn opaque_id_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}
