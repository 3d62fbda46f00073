//! Game assembly from the three Gameday documents.
//!
//! A [`GameBuilder`] turns a parsed boxscore, roster (`players.xml`) and
//! play-by-play (`inning/inning_all.xml`) into a [`Game`]. The pipelines only
//! depend on the trait; [`BoxscoreGameBuilder`] is the stock implementation.

use std::fmt;

use serde::Serialize;

use crate::document::{Document, Element};

/// Builds one game from its three documents. `None` means the documents do
/// not describe a playable game (postponed, not started, wrong document kind).
///
/// Builders are shared read-only by every batch worker, hence `Send + Sync`.
pub trait GameBuilder: Send + Sync {
    fn build(&self, boxscore: &Document, roster: &Document, plays: &Document) -> Option<Game>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    pub game_id: String,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    pub away: TeamLine,
    pub home: TeamLine,
    pub innings: Vec<InningRuns>,
    pub umpires: Vec<String>,
    pub at_bats: Vec<AtBat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamLine {
    pub code: String,
    pub name: Option<String>,
    pub runs: Option<u32>,
    pub hits: Option<u32>,
    pub errors: Option<u32>,
    pub roster_size: usize,
}

/// Runs scored in one inning. `None` for a half that was not played
/// (the home half of the ninth when the home side leads, for instance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InningRuns {
    pub inning: u32,
    pub away: Option<u32>,
    pub home: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtBat {
    pub inning: u32,
    pub half: Half,
    pub batter: Option<String>,
    pub pitcher: Option<String>,
    pub event: Option<String>,
    pub description: Option<String>,
}

impl Game {
    pub fn final_score(&self) -> Option<(u32, u32)> {
        Some((self.away.runs?, self.home.runs?))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let away = self.away.name.as_deref().unwrap_or(&self.away.code);
        let home = self.home.name.as_deref().unwrap_or(&self.home.code);
        match self.final_score() {
            Some((a, h)) => writeln!(f, "{away} {a} @ {home} {h}")?,
            None => writeln!(f, "{away} @ {home}")?,
        }
        if let Some(venue) = &self.venue {
            write!(f, "  {venue}")?;
            if let Some(date) = &self.date {
                write!(f, ", {date}")?;
            }
            writeln!(f)?;
        }
        if !self.innings.is_empty() {
            let cell = |runs: Option<u32>| runs.map_or("x".to_string(), |r| r.to_string());
            let heading: Vec<String> = self.innings.iter().map(|i| i.inning.to_string()).collect();
            let away_runs: Vec<String> = self.innings.iter().map(|i| cell(i.away)).collect();
            let home_runs: Vec<String> = self.innings.iter().map(|i| cell(i.home)).collect();
            writeln!(f, "  {:<5}{}", "", heading.join(" "))?;
            writeln!(f, "  {:<5}{}{}", self.away.code, away_runs.join(" "), rhe(&self.away))?;
            writeln!(f, "  {:<5}{}{}", self.home.code, home_runs.join(" "), rhe(&self.home))?;
        }
        write!(
            f,
            "  rosters: {}/{}  at-bats: {}",
            self.away.roster_size,
            self.home.roster_size,
            self.at_bats.len()
        )?;
        if !self.umpires.is_empty() {
            write!(f, "  umpires: {}", self.umpires.join(", "))?;
        }
        Ok(())
    }
}

fn rhe(line: &TeamLine) -> String {
    match (line.runs, line.hits, line.errors) {
        (Some(r), Some(h), Some(e)) => format!("  - {r} {h} {e}"),
        _ => String::new(),
    }
}

/// Stock builder for Gameday `boxscore.xml` / `players.xml` /
/// `inning_all.xml` triples.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxscoreGameBuilder;

impl GameBuilder for BoxscoreGameBuilder {
    fn build(&self, boxscore: &Document, roster: &Document, plays: &Document) -> Option<Game> {
        let root = &boxscore.root;
        if root.name != "boxscore" {
            return None;
        }
        let away_code = root.attr("away_team_code")?;
        let home_code = root.attr("home_team_code")?;

        let mut away = TeamLine {
            code: away_code.to_string(),
            name: root.attr("away_fname").map(str::to_string),
            ..TeamLine::default()
        };
        let mut home = TeamLine {
            code: home_code.to_string(),
            name: root.attr("home_fname").map(str::to_string),
            ..TeamLine::default()
        };

        let mut innings = Vec::new();
        if let Some(linescore) = root.child("linescore") {
            away.runs = number(linescore, "away_team_runs");
            away.hits = number(linescore, "away_team_hits");
            away.errors = number(linescore, "away_team_errors");
            home.runs = number(linescore, "home_team_runs");
            home.hits = number(linescore, "home_team_hits");
            home.errors = number(linescore, "home_team_errors");
            innings = linescore
                .children_named("inning_line_score")
                .filter_map(|line| {
                    Some(InningRuns {
                        inning: number(line, "inning")?,
                        away: number(line, "away"),
                        home: number(line, "home"),
                    })
                })
                .collect();
        }

        for team in roster.root.children_named("team") {
            let size = team.children_named("player").count();
            match team.attr("type") {
                Some("away") => away.roster_size = size,
                Some("home") => home.roster_size = size,
                _ => {}
            }
        }

        let umpires = roster
            .root
            .descendants_named("umpire")
            .into_iter()
            .filter_map(|u| u.attr("name").map(str::to_string))
            .collect();

        Some(Game {
            game_id: root.attr("game_id").unwrap_or_default().to_string(),
            venue: root
                .attr("venue_name")
                .or_else(|| roster.root.attr("venue"))
                .map(str::to_string),
            date: root
                .attr("date")
                .or_else(|| roster.root.attr("date"))
                .map(str::to_string),
            status: root.attr("status_ind").map(str::to_string),
            away,
            home,
            innings,
            umpires,
            at_bats: at_bats(plays),
        })
    }
}

fn number(element: &Element, key: &str) -> Option<u32> {
    element.attr(key)?.trim().parse().ok()
}

fn at_bats(plays: &Document) -> Vec<AtBat> {
    let mut out = Vec::new();
    for inning in plays.root.children_named("inning") {
        let Some(num) = number(inning, "num") else {
            continue;
        };
        for (half_name, half) in [("top", Half::Top), ("bottom", Half::Bottom)] {
            let Some(half_el) = inning.child(half_name) else {
                continue;
            };
            out.extend(half_el.children_named("atbat").map(|ab| AtBat {
                inning: num,
                half,
                batter: ab.attr("batter").map(str::to_string),
                pitcher: ab.attr("pitcher").map(str::to_string),
                event: ab.attr("event").map(str::to_string),
                description: ab.attr("des").map(str::to_string),
            }));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    const BOXSCORE: &str = r#"<boxscore game_id="2015/04/05/nyamlb-bosmlb-1" venue_name="Fenway Park"
        away_team_code="nya" home_team_code="bos" away_fname="New York Yankees"
        home_fname="Boston Red Sox" date="April 5, 2015" status_ind="F">
        <linescore away_team_runs="3" home_team_runs="5" away_team_hits="8"
            home_team_hits="10" away_team_errors="0" home_team_errors="1">
            <inning_line_score away="0" home="2" inning="1"/>
            <inning_line_score away="3" home="3" inning="2"/>
            <inning_line_score away="0" home="" inning="3"/>
        </linescore>
    </boxscore>"#;

    const PLAYERS: &str = r#"<game venue="Fenway Park" date="April 5, 2015">
        <team type="away" id="NYY"><player id="1"/><player id="2"/></team>
        <team type="home" id="BOS"><player id="3"/></team>
        <umpires><umpire position="home" name="Joe West"/></umpires>
    </game>"#;

    const INNINGS: &str = r#"<game>
        <inning num="1">
            <top><atbat num="1" batter="1" pitcher="3" event="Strikeout" des="struck out"/></top>
            <bottom><atbat num="2" batter="3" pitcher="2" event="Home Run" des="homers"/>
                    <atbat num="3" batter="3" pitcher="2" event="Walk"/></bottom>
        </inning>
        <inning num="2"><top/></inning>
    </game>"#;

    fn docs() -> (Document, Document, Document) {
        (
            parse_document(BOXSCORE).unwrap(),
            parse_document(PLAYERS).unwrap(),
            parse_document(INNINGS).unwrap(),
        )
    }

    #[test]
    fn builds_full_game() {
        let (b, r, p) = docs();
        let game = BoxscoreGameBuilder.build(&b, &r, &p).unwrap();

        assert_eq!(game.game_id, "2015/04/05/nyamlb-bosmlb-1");
        assert_eq!(game.venue.as_deref(), Some("Fenway Park"));
        assert_eq!(game.final_score(), Some((3, 5)));
        assert_eq!(game.home.errors, Some(1));
        assert_eq!(game.away.roster_size, 2);
        assert_eq!(game.home.roster_size, 1);
        assert_eq!(game.innings.len(), 3);
        assert_eq!(game.innings[2].home, None);
        assert_eq!(game.umpires, vec!["Joe West".to_string()]);

        assert_eq!(game.at_bats.len(), 3);
        assert_eq!(game.at_bats[0].half, Half::Top);
        assert_eq!(game.at_bats[1].event.as_deref(), Some("Home Run"));
        assert_eq!(game.at_bats[2].description, None);
    }

    #[test]
    fn non_boxscore_root_builds_nothing() {
        let (_, r, p) = docs();
        let wrong = parse_document(r#"<game away_team_code="nya" home_team_code="bos"/>"#).unwrap();
        assert!(BoxscoreGameBuilder.build(&wrong, &r, &p).is_none());

        let no_teams = parse_document(r#"<boxscore game_id="x"/>"#).unwrap();
        assert!(BoxscoreGameBuilder.build(&no_teams, &r, &p).is_none());
    }

    #[test]
    fn game_without_linescore_still_builds() {
        let (_, r, p) = docs();
        let b = parse_document(r#"<boxscore away_team_code="nya" home_team_code="bos"/>"#).unwrap();
        let game = BoxscoreGameBuilder.build(&b, &r, &p).unwrap();
        assert_eq!(game.final_score(), None);
        assert!(game.innings.is_empty());
        assert_eq!(game.venue.as_deref(), Some("Fenway Park"));
    }

    #[test]
    fn renders_line_score() {
        let (b, r, p) = docs();
        let rendered = BoxscoreGameBuilder.build(&b, &r, &p).unwrap().to_string();
        assert!(rendered.starts_with("New York Yankees 3 @ Boston Red Sox 5\n"));
        assert!(rendered.contains("Fenway Park, April 5, 2015"));
        assert!(rendered.contains("nya  0 3 0  - 3 8 0"));
        assert!(rendered.contains("bos  2 3 x  - 5 10 1"));
        assert!(rendered.contains("rosters: 2/1  at-bats: 3"));
        assert!(rendered.contains("umpires: Joe West"));
    }
}
