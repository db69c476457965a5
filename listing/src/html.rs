//! Plain-string rendering backend over the view-models.
//!
//! The Leptos components are the primary presentation; this backend produces
//! the same regions as raw markup for the admin preview and for tests that
//! check escaping and layout without a browser.

use crate::escape::{escape_attr, escape_html};
use crate::view;

pub fn not_found(what: &str) -> String {
    format!("<p class=\"not-found\">{} not found</p>", escape_html(what))
}

pub fn demon_list(rows: &[view::DemonRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str("<div class=\"list-entry\">");
        out.push_str(&format!(
            "<span class=\"placement\">#{}</span>",
            row.placement.map(|p| p.to_string()).unwrap_or_else(|| "?".to_owned())
        ));
        out.push_str(&format!(
            "<a href=\"/demon/{}\" class=\"name\">{}</a>",
            escape_attr(&row.id),
            escape_html(&row.name)
        ));
        match row.aredl_rank {
            Some(rank) => out.push_str(&format!("<span class=\"aredl\">AREDL #{}</span>", rank)),
            None => out.push_str("<span class=\"aredl\"></span>"),
        }
        out.push_str(&format!("<span class=\"points\">{} pts</span>", row.points));
        if let Some(face) = &row.face {
            out.push_str(&format!(
                "<img src=\"{}\" class=\"diff-face\" alt=\"\">",
                escape_attr(face)
            ));
        }
        out.push_str("</div>");
    }
    out
}

pub fn player_sidebar(rows: &[view::PlayerRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str("<div class=\"player-entry\">");
        out.push_str(&format!(
            "<span class=\"placement\">#{}</span>",
            row.rank.map(|r| r.to_string()).unwrap_or_else(|| "?".to_owned())
        ));
        if let Some(flag) = &row.flag {
            out.push_str(&format!(
                "<img class=\"flag\" src=\"{}\" alt=\"\">",
                escape_attr(flag)
            ));
        }
        out.push_str(&format!(
            "<a href=\"/player/{}\">{}</a>",
            escape_attr(&row.id),
            escape_html(&row.name)
        ));
        out.push_str("</div>");
    }
    out
}

pub fn demon_detail(detail: &view::DemonDetail) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"demon-head\">");
    if let Some(face) = &detail.face {
        out.push_str(&format!(
            "<img src=\"{}\" class=\"diff-face\" alt=\"\">",
            escape_attr(face)
        ));
    }
    out.push_str(&format!(
        "<span class=\"name\">{}</span>",
        escape_html(&detail.name)
    ));
    if let Some(rank) = detail.aredl_rank {
        out.push_str(&format!("<span class=\"aredl-badge\">AREDL #{}</span>", rank));
    }
    out.push_str(&format!(
        "<span class=\"sub\">Rank #{} \u{2022} {}</span>",
        detail
            .placement
            .map(|p| p.to_string())
            .unwrap_or_else(|| "?".to_owned()),
        escape_html(&detail.creator)
    ));
    out.push_str("</div>");

    out.push_str("<div class=\"demon-meta\">");
    out.push_str(&format!("<p>Publisher: {}</p>", escape_html(&detail.publisher)));
    out.push_str(&format!(
        "<p>Level ID: {}</p>",
        detail.level_id.map(|v| v.to_string()).unwrap_or_default()
    ));
    out.push_str(&format!("<p>Length: {}</p>", detail.length));
    out.push_str(&format!(
        "<p>Objects: {}</p>",
        detail.objects.map(|v| v.to_string()).unwrap_or_default()
    ));
    out.push_str(&format!("<p>List Points: {}</p>", detail.list_points));
    match &detail.song {
        Some(view::SongLink::Direct(link)) => out.push_str(&format!(
            "<p>Song: <a href=\"{}\" target=\"_blank\">NONG</a></p>",
            escape_attr(link)
        )),
        Some(view::SongLink::Newgrounds(link)) => out.push_str(&format!(
            "<p>Song: <a href=\"{}\" target=\"_blank\">Newgrounds</a></p>",
            escape_attr(link)
        )),
        None => out.push_str("<p>Song: \u{2014}</p>"),
    }
    out.push_str("</div>");

    out.push_str("<div class=\"records\">");
    out.push_str(&record_rows(&detail.records));
    out.push_str("</div>");

    out
}

pub fn record_rows(rows: &[view::RecordRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str("<div class=\"record-entry\">");
        match &row.flag {
            Some(flag) => out.push_str(&format!(
                "<img class=\"flag\" src=\"{}\" alt=\"\">",
                escape_attr(flag)
            )),
            None => out.push_str("<span class=\"flag-spacer\"></span>"),
        }
        out.push_str(&format!(
            "<a href=\"/player/{}\">{}</a>",
            escape_attr(&row.player_id),
            escape_html(&row.player_name)
        ));
        match &row.video {
            Some(link) => out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\">YouTube</a>",
                escape_attr(link)
            )),
            None => out.push_str("<span class=\"no-video\">YouTube</span>"),
        }
        out.push_str("</div>");
    }
    out
}

pub fn player_detail(detail: &view::PlayerDetail) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"player-info\">");
    if let Some(flag) = &detail.flag {
        out.push_str(&format!(
            "<img src=\"{}\" class=\"flag-big\" alt=\"\">",
            escape_attr(flag)
        ));
    }
    out.push_str(&format!(
        "<p>GD Username: {}</p>",
        escape_html(&detail.gd_username)
    ));
    out.push_str(&format!("<p>Clan: {}</p>", escape_html(&detail.clan)));
    out.push_str(&format!(
        "<p>Rank: #{}</p>",
        detail.rank.map(|r| r.to_string()).unwrap_or_else(|| "?".to_owned())
    ));
    out.push_str(&format!("<p>List Points: {}</p>", detail.list_points));
    match &detail.hardest {
        Some(link) => out.push_str(&format!(
            "<p>Hardest: <a href=\"/demon/{}\">{}</a></p>",
            escape_attr(&link.id),
            escape_html(&link.name)
        )),
        None => out.push_str("<p>Hardest: \u{2014}</p>"),
    }
    out.push_str("</div>");

    out.push_str("<div class=\"completions\">");
    for link in &detail.completions {
        out.push_str(&format!(
            "<div class=\"completion\"><a href=\"/demon/{}\">{}</a></div>",
            escape_attr(&link.id),
            escape_html(&link.name)
        ));
    }
    out.push_str("</div>");

    out
}
