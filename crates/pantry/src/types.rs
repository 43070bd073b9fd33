use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum StorageMethod {
    #[default]
    #[serde(rename = "冷蔵")]
    #[strum(serialize = "冷蔵")]
    Refrigerated,
    #[serde(rename = "冷凍")]
    #[strum(serialize = "冷凍")]
    Frozen,
    #[serde(rename = "常温")]
    #[strum(serialize = "常温")]
    RoomTemperature,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn storage_method_uses_japanese_labels() {
        assert_eq!(StorageMethod::Frozen.to_string(), "冷凍");
        assert_eq!(
            StorageMethod::from_str("常温").unwrap(),
            StorageMethod::RoomTemperature
        );
        assert!(StorageMethod::from_str("冷蔵庫").is_err());
        assert_eq!(StorageMethod::VARIANTS.len(), 3);
    }
}
