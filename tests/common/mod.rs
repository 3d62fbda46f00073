#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const BOXSCORE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<boxscore game_id="2015/04/05/nyamlb-bosmlb-1" venue_name="Fenway Park"
    away_team_code="nya" home_team_code="bos" away_fname="New York Yankees"
    home_fname="Boston Red Sox" date="April 5, 2015" status_ind="F">
  <linescore away_team_runs="3" home_team_runs="5" away_team_hits="8"
      home_team_hits="10" away_team_errors="0" home_team_errors="1">
    <inning_line_score away="1" home="0" inning="1"/>
    <inning_line_score away="2" home="5" inning="2"/>
  </linescore>
</boxscore>"#;

pub const PLAYERS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<game venue="Fenway Park" date="April 5, 2015">
  <team type="away" id="NYY" name="New York Yankees">
    <player id="116539" first="Derek" last="Jeter" position="SS"/>
  </team>
  <team type="home" id="BOS" name="Boston Red Sox">
    <player id="120074" first="David" last="Ortiz" position="DH"/>
    <player id="456030" first="Dustin" last="Pedroia" position="2B"/>
  </team>
  <umpires><umpire position="home" name="Joe West"/></umpires>
</game>"#;

pub const INNING_ALL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<game atBat="116539" ind="F">
  <inning num="1" away_team="nya" home_team="bos">
    <top>
      <atbat num="1" batter="116539" pitcher="519242" event="Single" des="Derek Jeter singles."/>
    </top>
    <bottom>
      <atbat num="2" batter="120074" pitcher="282332" event="Flyout" des="David Ortiz flies out."/>
    </bottom>
  </inning>
</game>"#;

/// `<root>/<Y>/month_<MM>/day_<DD>/gid_<Y>_<MM>_<DD>_<away>mlb_<home>mlb_<n>`
pub fn game_dir(root: &Path, ymd: (&str, &str, &str), away: &str, home: &str, n: u32) -> PathBuf {
    let (y, m, d) = ymd;
    root.join(y)
        .join(format!("month_{m}"))
        .join(format!("day_{d}"))
        .join(format!("gid_{y}_{m}_{d}_{away}mlb_{home}mlb_{n}"))
}

/// Write a game folder with the given documents. `None` leaves a file out.
pub fn write_game(
    dir: &Path,
    boxscore: Option<&str>,
    players: Option<&str>,
    inning_all: Option<&str>,
) {
    fs::create_dir_all(dir.join("inning")).unwrap();
    if let Some(body) = boxscore {
        fs::write(dir.join("boxscore.xml"), body).unwrap();
    }
    if let Some(body) = players {
        fs::write(dir.join("players.xml"), body).unwrap();
    }
    if let Some(body) = inning_all {
        fs::write(dir.join("inning").join("inning_all.xml"), body).unwrap();
    }
}

pub fn write_complete_game(dir: &Path) {
    write_game(dir, Some(BOXSCORE), Some(PLAYERS), Some(INNING_ALL));
}
