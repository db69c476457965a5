//! Pure projections from resolved datasets to per-page view-models.
//!
//! Nothing in here touches the DOM or performs IO; the structs describe what
//! a page region shows and rendering backends decide how it looks.

use common::{Demon, Player};

use crate::format_length;
use crate::resolver::ListData;

pub fn face_asset(tag: &str) -> String {
    format!("assets/faces/{}.png", tag)
}

pub fn flag_asset(country: &str) -> String {
    format!("assets/flags/{}.png", country.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemonRow {
    pub id: String,
    pub name: String,
    pub placement: Option<u32>,
    pub aredl_rank: Option<u32>,
    pub points: i64,
    pub face: Option<String>,
}

/// Rows for the landing page list, ascending by placement with unplaced
/// demons last.
pub fn demon_rows(mut demons: Vec<Demon>) -> Vec<DemonRow> {
    demons.sort_by_key(|d| d.placement.unwrap_or(u32::MAX));
    demons
        .into_iter()
        .map(|d| DemonRow {
            face: d.difficulty.as_deref().map(face_asset),
            placement: d.placement,
            aredl_rank: d.aredl_rank,
            points: d.points.unwrap_or(0),
            id: d.id,
            name: d.name,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRow {
    pub id: String,
    pub name: String,
    pub rank: Option<u32>,
    pub flag: Option<String>,
}

/// Rows for the player sidebar, ascending by rank with unranked players
/// last.
pub fn player_rows(mut players: Vec<Player>) -> Vec<PlayerRow> {
    players.sort_by_key(|p| p.rank.unwrap_or(u32::MAX));
    players
        .into_iter()
        .map(|p| PlayerRow {
            flag: p.country.as_deref().map(flag_asset),
            rank: p.rank,
            id: p.id,
            name: p.name,
        })
        .collect()
}

/// The player a detail page shows when no identifier was requested: the one
/// with the numerically smallest rank.
pub fn select_default(players: &[Player]) -> Option<&Player> {
    players.iter().min_by_key(|p| p.rank.unwrap_or(u32::MAX))
}

/// Target of the fixed "Players" navigation anchor.
pub fn nav_target(players: &[Player]) -> Option<String> {
    select_default(players).map(|p| p.id.clone())
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SongLink {
    /// Direct link to the replacement song file.
    Direct(String),
    /// Newgrounds audio page derived from the track id.
    Newgrounds(String),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordRow {
    pub player_id: String,
    pub player_name: String,
    pub flag: Option<String>,
    pub video: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemonDetail {
    pub id: String,
    pub name: String,
    pub face: Option<String>,
    pub aredl_rank: Option<u32>,
    pub placement: Option<u32>,
    pub creator: String,
    pub publisher: String,
    pub level_id: Option<u64>,
    pub length: String,
    pub objects: Option<u64>,
    pub list_points: i64,
    pub song: Option<SongLink>,
    pub records: Vec<RecordRow>,
}

/// Detail view for one demon, `None` when the identifier does not resolve.
///
/// Every record referencing the demon is kept, even when its player does
/// not resolve; the raw player id then stands in for the name and the flag
/// is dropped.
pub fn demon_detail(id: &str, data: &ListData) -> Option<DemonDetail> {
    let demon = data.demons.iter().find(|d| d.id == id)?;

    let records = data
        .records
        .iter()
        .filter(|r| r.demon_id == id)
        .map(|r| {
            let player = data.players.iter().find(|p| p.id == r.player_id);
            RecordRow {
                player_name: player
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| r.player_id.clone()),
                flag: player
                    .and_then(|p| p.country.as_deref())
                    .map(flag_asset),
                player_id: r.player_id.clone(),
                video: r.youtube.clone(),
            }
        })
        .collect();

    let song = demon.song.as_ref().and_then(|s| match (&s.nong_link, s.ng_id) {
        (Some(link), _) => Some(SongLink::Direct(link.clone())),
        (None, Some(ng_id)) => Some(SongLink::Newgrounds(format!(
            "https://www.newgrounds.com/audio/listen/{}",
            ng_id
        ))),
        (None, None) => None,
    });

    Some(DemonDetail {
        id: demon.id.clone(),
        name: demon.name.clone(),
        face: demon.difficulty_icon.as_deref().map(face_asset),
        aredl_rank: demon.aredl_rank,
        placement: demon.placement,
        creator: demon.creator.clone().unwrap_or_default(),
        publisher: demon.publisher.clone().unwrap_or_default(),
        level_id: demon.level_id,
        length: format_length(demon.length_seconds.unwrap_or(0)),
        objects: demon.objects,
        list_points: demon.list_points.unwrap_or(0),
        song,
        records,
    })
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemonLink {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerDetail {
    pub id: String,
    pub name: String,
    pub flag: Option<String>,
    pub gd_username: String,
    pub clan: String,
    pub rank: Option<u32>,
    pub list_points: i64,
    pub hardest: Option<DemonLink>,
    pub completions: Vec<DemonLink>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerSelection {
    pub detail: PlayerDetail,
    /// True when no identifier was requested and the top-ranked player was
    /// picked implicitly; the shell should rewrite the navigation context
    /// to `detail.id`.
    pub defaulted: bool,
}

/// Detail view for one player, `None` when the identifier does not resolve
/// (or when nothing was requested and there are no players to default to).
pub fn player_detail(requested: Option<&str>, data: &ListData) -> Option<PlayerSelection> {
    let (player, defaulted) = match requested {
        Some(id) => (data.players.iter().find(|p| p.id == id)?, false),
        None => (select_default(&data.players)?, true),
    };

    let hardest = player.hardest.as_ref().map(|id| DemonLink {
        name: data
            .demons
            .iter()
            .find(|d| d.id == *id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| id.clone()),
        id: id.clone(),
    });

    // Completions whose id does not resolve to a demon are dropped.
    let completions = player
        .beaten_demons
        .iter()
        .filter_map(|id| {
            data.demons.iter().find(|d| d.id == *id).map(|d| DemonLink {
                id: d.id.clone(),
                name: d.name.clone(),
            })
        })
        .collect();

    Some(PlayerSelection {
        detail: PlayerDetail {
            id: player.id.clone(),
            name: player.name.clone(),
            flag: player.country.as_deref().map(flag_asset),
            gd_username: player.gd_username.clone().unwrap_or_default(),
            clan: player.clan.clone().unwrap_or_default(),
            rank: player.rank,
            list_points: player.list_points.unwrap_or(0),
            hardest,
            completions,
        },
        defaulted,
    })
}
