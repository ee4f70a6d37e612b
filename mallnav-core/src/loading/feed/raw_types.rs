use serde::Deserialize;

use super::de::{deserialize_date, deserialize_flag, deserialize_flag_or_true, deserialize_list};

#[derive(Debug, Deserialize)]
pub struct FeedNode {
    pub qr_id: String,
    pub floor: u8,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: i32,
    pub y: i32,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub nearby_landmarks: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub connected_nodes: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "deserialize_flag_or_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct FeedEdge {
    pub from_node: String,
    pub to_node: String,
    pub distance: u32,
    pub direction: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub landmarks: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "deserialize_flag_or_true")]
    pub is_accessible: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub floor_change: bool,
    pub estimated_time: u32,
}

#[derive(Debug, Deserialize)]
pub struct FeedStore {
    pub store_id: String,
    pub name: String,
    pub floor: u8,
    pub category: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub qr_location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub monday: String,
    #[serde(default)]
    pub tuesday: String,
    #[serde(default)]
    pub wednesday: String,
    #[serde(default)]
    pub thursday: String,
    #[serde(default)]
    pub friday: String,
    #[serde(default)]
    pub saturday: String,
    #[serde(default)]
    pub sunday: String,
    #[serde(default = "default_true", deserialize_with = "deserialize_flag_or_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct FeedPromotion {
    pub store_id: String,
    pub title: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub valid_until: chrono::NaiveDate,
    #[serde(default = "default_true", deserialize_with = "deserialize_flag_or_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
