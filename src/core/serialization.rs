//! 盤面は行ごとの文字列 (`["- - B ...", ...]`) として保存する

use super::board::Board;
use super::setup::setup_from_strings;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.row_strings().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        setup_from_strings(&refs).map_err(de::Error::custom)
    }
}
