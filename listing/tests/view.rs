use common::{Demon, Player, Record, Song};
use listing::resolver::ListData;
use listing::view;
use pretty_assertions::assert_eq;

fn demon(id: &str, name: &str, placement: Option<u32>) -> Demon {
    Demon {
        id: id.to_owned(),
        name: name.to_owned(),
        placement,
        ..Demon::default()
    }
}

fn player(id: &str, name: &str, rank: Option<u32>) -> Player {
    Player {
        id: id.to_owned(),
        name: name.to_owned(),
        rank,
        ..Player::default()
    }
}

#[test]
fn demon_rows_sort_by_placement_regardless_of_input_order() {
    let forward = vec![
        demon("a", "A", Some(1)),
        demon("b", "B", Some(2)),
        demon("c", "C", None),
        demon("d", "D", Some(3)),
    ];
    let mut shuffled = forward.clone();
    shuffled.swap(0, 3);
    shuffled.swap(1, 2);

    let rows = view::demon_rows(forward);
    let placements: Vec<_> = rows.iter().map(|r| r.placement).collect();
    assert_eq!(vec![Some(1), Some(2), Some(3), None], placements);

    assert_eq!(rows, view::demon_rows(shuffled));
}

#[test]
fn demon_rows_carry_face_and_points() {
    let mut d = demon("a", "A", Some(1));
    d.difficulty = Some("extreme".to_owned());
    d.points = Some(250);
    d.aredl_rank = Some(4);

    let rows = view::demon_rows(vec![d]);

    assert_eq!(Some("assets/faces/extreme.png".to_owned()), rows[0].face);
    assert_eq!(250, rows[0].points);
    assert_eq!(Some(4), rows[0].aredl_rank);
}

#[test]
fn player_rows_sort_unranked_last() {
    let players = vec![
        player("x", "X", None),
        player("y", "Y", Some(2)),
        player("z", "Z", Some(1)),
    ];

    let rows = view::player_rows(players);

    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(vec!["z", "y", "x"], ids);
}

#[test]
fn player_rows_lowercase_country_for_flag() {
    let mut p = player("x", "X", Some(1));
    p.country = Some("DE".to_owned());

    let rows = view::player_rows(vec![p]);

    assert_eq!(Some("assets/flags/de.png".to_owned()), rows[0].flag);
}

#[test]
fn select_default_picks_minimum_rank() {
    let players = vec![
        player("x", "X", None),
        player("y", "Y", Some(7)),
        player("z", "Z", Some(3)),
    ];

    assert_eq!(Some("z"), view::select_default(&players).map(|p| p.id.as_str()));
    assert_eq!(None, view::select_default(&[]).map(|p| p.id.as_str()));
}

#[test]
fn nav_target_is_top_ranked_player() {
    let players = vec![player("y", "Y", Some(2)), player("z", "Z", Some(1))];

    assert_eq!(Some("z".to_owned()), view::nav_target(&players));
    assert_eq!(None, view::nav_target(&[]));
}

fn detail_data() -> ListData {
    let mut featured = demon("bloodbath", "Bloodbath", Some(1));
    featured.difficulty_icon = Some("extreme".to_owned());
    featured.aredl_rank = Some(4);
    featured.creator = Some("Riot".to_owned());
    featured.publisher = Some("Riot".to_owned());
    featured.level_id = Some(10565740);
    featured.length_seconds = Some(125);
    featured.objects = Some(24746);
    featured.list_points = Some(350);
    featured.song = Some(Song {
        nong_link: None,
        ng_id: Some(467339),
    });

    let mut with_country = player("p1", "Zoink", Some(1));
    with_country.country = Some("SE".to_owned());
    with_country.hardest = Some("bloodbath".to_owned());
    with_country.beaten_demons = vec!["bloodbath".to_owned(), "missing".to_owned()];

    ListData {
        demons: vec![featured, demon("other", "Other", Some(2))],
        players: vec![with_country, player("p2", "Crossy", Some(2))],
        records: vec![
            Record {
                demon_id: "bloodbath".to_owned(),
                player_id: "p1".to_owned(),
                youtube: Some("https://yt.example/v1".to_owned()),
            },
            Record {
                demon_id: "bloodbath".to_owned(),
                player_id: "ghost".to_owned(),
                youtube: None,
            },
            Record {
                demon_id: "other".to_owned(),
                player_id: "p1".to_owned(),
                youtube: None,
            },
        ],
    }
}

#[test]
fn demon_detail_projects_metadata() {
    let data = detail_data();

    let detail = view::demon_detail("bloodbath", &data).unwrap();

    assert_eq!("Bloodbath", detail.name);
    assert_eq!(Some("assets/faces/extreme.png".to_owned()), detail.face);
    assert_eq!(Some(4), detail.aredl_rank);
    assert_eq!("2:05", detail.length);
    assert_eq!(350, detail.list_points);
    assert_eq!(
        Some(view::SongLink::Newgrounds(
            "https://www.newgrounds.com/audio/listen/467339".to_owned()
        )),
        detail.song
    );
}

#[test]
fn demon_detail_prefers_direct_song_link() {
    let mut data = detail_data();
    data.demons[0].song = Some(Song {
        nong_link: Some("https://nong.example/song.mp3".to_owned()),
        ng_id: Some(467339),
    });

    let detail = view::demon_detail("bloodbath", &data).unwrap();

    assert_eq!(
        Some(view::SongLink::Direct("https://nong.example/song.mp3".to_owned())),
        detail.song
    );
}

#[test]
fn demon_detail_unknown_id_is_not_found() {
    assert_eq!(None, view::demon_detail("nope", &detail_data()));
}

#[test]
fn demon_detail_keeps_records_with_unknown_player() {
    let data = detail_data();

    let detail = view::demon_detail("bloodbath", &data).unwrap();

    // Only records referencing this demon, in dataset order.
    assert_eq!(2, detail.records.len());

    assert_eq!("Zoink", detail.records[0].player_name);
    assert_eq!(Some("assets/flags/se.png".to_owned()), detail.records[0].flag);
    assert_eq!(Some("https://yt.example/v1".to_owned()), detail.records[0].video);

    // The dangling reference renders with the raw id and no flag.
    assert_eq!("ghost", detail.records[1].player_name);
    assert_eq!("ghost", detail.records[1].player_id);
    assert_eq!(None, detail.records[1].flag);
    assert_eq!(None, detail.records[1].video);
}

#[test]
fn player_detail_resolves_completions_and_drops_dangling_ids() {
    let data = detail_data();

    let selection = view::player_detail(Some("p1"), &data).unwrap();

    assert!(!selection.defaulted);
    assert_eq!("Zoink", selection.detail.name);
    assert_eq!(Some("assets/flags/se.png".to_owned()), selection.detail.flag);
    assert_eq!(
        Some(view::DemonLink {
            id: "bloodbath".to_owned(),
            name: "Bloodbath".to_owned(),
        }),
        selection.detail.hardest
    );
    // "missing" does not resolve and is silently omitted.
    assert_eq!(
        vec![view::DemonLink {
            id: "bloodbath".to_owned(),
            name: "Bloodbath".to_owned(),
        }],
        selection.detail.completions
    );
}

#[test]
fn player_detail_defaults_to_top_ranked_player() {
    let data = detail_data();

    let implicit = view::player_detail(None, &data).unwrap();
    assert!(implicit.defaulted);
    assert_eq!("p1", implicit.detail.id);

    // Repeating the call with the now-explicit id renders identically.
    let explicit = view::player_detail(Some("p1"), &data).unwrap();
    assert!(!explicit.defaulted);
    assert_eq!(implicit.detail, explicit.detail);
}

#[test]
fn player_detail_unknown_id_is_not_found() {
    assert_eq!(None, view::player_detail(Some("nope"), &detail_data()));
}

#[test]
fn player_detail_without_players_is_not_found() {
    assert_eq!(None, view::player_detail(None, &ListData::default()));
}

#[test]
fn player_detail_hardest_falls_back_to_raw_id() {
    let mut data = detail_data();
    data.players[0].hardest = Some("deleted".to_owned());

    let selection = view::player_detail(Some("p1"), &data).unwrap();

    assert_eq!(
        Some(view::DemonLink {
            id: "deleted".to_owned(),
            name: "deleted".to_owned(),
        }),
        selection.detail.hardest
    );
}
