//! Record shapes for the three published datasets.
//!
//! Every optional field defaults to `None`/empty so that a dataset entry is
//! accepted as long as it is valid JSON of roughly the right shape.

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Demon {
    pub id: String,
    pub name: String,
    pub placement: Option<u32>,
    pub points: Option<i64>,
    pub difficulty: Option<String>,
    #[serde(rename = "difficultyIcon")]
    pub difficulty_icon: Option<String>,
    #[serde(rename = "aredlRank")]
    pub aredl_rank: Option<u32>,
    pub song: Option<Song>,
    pub creator: Option<String>,
    pub publisher: Option<String>,
    #[serde(rename = "levelID")]
    pub level_id: Option<u64>,
    #[serde(rename = "lengthSeconds")]
    pub length_seconds: Option<u64>,
    pub objects: Option<u64>,
    #[serde(rename = "listPoints")]
    pub list_points: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Song {
    #[serde(rename = "nongLink")]
    pub nong_link: Option<String>,
    #[serde(rename = "ngID")]
    pub ng_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub rank: Option<u32>,
    #[serde(rename = "listPoints")]
    pub list_points: Option<i64>,
    #[serde(rename = "gdUsername")]
    pub gd_username: Option<String>,
    pub clan: Option<String>,
    pub hardest: Option<String>,
    #[serde(rename = "beatenDemons")]
    pub beaten_demons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(rename = "demonID")]
    pub demon_id: String,
    #[serde(rename = "playerID")]
    pub player_id: String,
    pub youtube: Option<String>,
}
