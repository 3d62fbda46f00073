//! Remote single-game fetcher.
//!
//! Builds the Gameday URL for one game, fetches the boxscore, and only when
//! it exists goes on to fetch the roster and play-by-play. All requests are
//! sequential and blocking, with no retry.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::RemoteConfig;
use crate::dates::{format_date, parse_date, ymd};
use crate::document::{parse_document, Document};
use crate::error::{GameError, GameResult};
use crate::game::GameBuilder;
use crate::locator::{
    BOXSCORE_FILE, GAME_FOLDER_PREFIX, INNING_ALL_FILE, INNING_DIR, PLAYERS_FILE,
};
use crate::models::ResolvedGame;
use crate::teams::TeamRegistry;

/// Blocking "GET url, give me the body" capability.
pub trait TextFetcher {
    /// `Ok(None)` when the resource does not exist (any non-success status).
    fn fetch_text(&self, url: &str) -> GameResult<Option<String>>;
}

/// [`TextFetcher`] over a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &RemoteConfig) -> GameResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| GameError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl TextFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> GameResult<Option<String>> {
        let fetch_error = |e: reqwest::Error| GameError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };
        let response = self.client.get(url).send().map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "treating non-success response as not found");
            return Ok(None);
        }
        response.text().map(Some).map_err(fetch_error)
    }
}

/// One game as requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameIdentifier {
    pub date: NaiveDate,
    pub away_team: String,
    pub home_team: String,
    pub away_code: &'static str,
    pub home_code: &'static str,
    pub game_number: String,
}

impl GameIdentifier {
    /// Fails on an unparseable date or a team the registry does not know.
    /// The game number is taken as given.
    pub fn new(
        date: &str,
        away_team: &str,
        home_team: &str,
        game_number: &str,
        registry: &TeamRegistry,
    ) -> GameResult<Self> {
        let date = parse_date(date)?;
        Ok(Self {
            date,
            away_code: registry.code_for(away_team)?,
            home_code: registry.code_for(home_team)?,
            away_team: away_team.to_string(),
            home_team: home_team.to_string(),
            game_number: game_number.to_string(),
        })
    }

    /// `YYYY-MM-DD-AWAY-HOME-N`, matching the ids file mode reports.
    pub fn game_id(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            format_date(self.date),
            self.away_team,
            self.home_team,
            self.game_number
        )
    }

    /// Folder URL for this game, with a trailing slash.
    pub fn url_base(&self, base_url: &str) -> String {
        let (year, month, day) = ymd(self.date);
        format!(
            "{}/year_{year}/month_{month}/day_{day}/{GAME_FOLDER_PREFIX}{year}_{month}_{day}_{}mlb_{}mlb_{}/",
            base_url.trim_end_matches('/'),
            self.away_code,
            self.home_code,
            self.game_number
        )
    }

    /// Boxscore, players and play-by-play URLs, in fetch order.
    pub fn document_urls(&self, base_url: &str) -> [String; 3] {
        let base = self.url_base(base_url);
        [
            format!("{base}{BOXSCORE_FILE}"),
            format!("{base}{PLAYERS_FILE}"),
            format!("{base}{INNING_DIR}/{INNING_ALL_FILE}"),
        ]
    }
}

#[derive(Debug)]
pub enum RemoteOutcome {
    Found(ResolvedGame),
    /// The service has no boxscore for this game.
    NotFound,
    /// All three documents arrived but the builder produced no game.
    Unbuildable,
}

/// Fetch and build one game.
pub fn fetch_game<F, B>(
    ident: &GameIdentifier,
    fetcher: &F,
    builder: &B,
    config: &RemoteConfig,
) -> GameResult<RemoteOutcome>
where
    F: TextFetcher + ?Sized,
    B: GameBuilder + ?Sized,
{
    let [boxscore_url, players_url, plays_url] = ident.document_urls(&config.base_url);

    info!(url = %boxscore_url, "fetching boxscore");
    let boxscore_text = match fetcher.fetch_text(&boxscore_url)? {
        Some(text) if text != config.not_found_sentinel => text,
        _ => return Ok(RemoteOutcome::NotFound),
    };
    let boxscore = parse_remote(&boxscore_url, &boxscore_text)?;
    let roster = fetch_document(fetcher, &players_url)?;
    let plays = fetch_document(fetcher, &plays_url)?;

    Ok(match builder.build(&boxscore, &roster, &plays) {
        Some(game) => RemoteOutcome::Found(ResolvedGame {
            id: ident.game_id(),
            game,
        }),
        None => RemoteOutcome::Unbuildable,
    })
}

fn fetch_document<F>(fetcher: &F, url: &str) -> GameResult<Document>
where
    F: TextFetcher + ?Sized,
{
    debug!(%url, "fetching");
    let text = fetcher
        .fetch_text(url)?
        .ok_or_else(|| GameError::MissingRemoteDocument(url.to_string()))?;
    parse_remote(url, &text)
}

fn parse_remote(url: &str, text: &str) -> GameResult<Document> {
    parse_document(text).map_err(|e| GameError::parse(url, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned bodies and records every URL asked for.
    #[derive(Default)]
    struct CannedFetcher {
        bodies: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.bodies.insert(url.to_string(), body.to_string());
            self
        }
    }

    impl TextFetcher for CannedFetcher {
        fn fetch_text(&self, url: &str) -> GameResult<Option<String>> {
            self.calls.borrow_mut().push(url.to_string());
            Ok(self.bodies.get(url).cloned())
        }
    }

    struct AnyBoxscore;

    impl GameBuilder for AnyBoxscore {
        fn build(&self, boxscore: &Document, _: &Document, _: &Document) -> Option<Game> {
            (boxscore.root.name == "boxscore").then(Game::default)
        }
    }

    const BASE: &str = "http://gd2.mlb.com/components/game/mlb";

    fn ident() -> GameIdentifier {
        GameIdentifier::new("2015-04-05", "NYY", "BOS", "1", TeamRegistry::mlb()).unwrap()
    }

    fn config() -> RemoteConfig {
        RemoteConfig {
            base_url: BASE.to_string(),
            ..RemoteConfig::default()
        }
    }

    #[test]
    fn builds_canonical_urls_and_id() {
        let id = ident();
        assert_eq!(id.game_id(), "2015-04-05-NYY-BOS-1");
        assert_eq!(
            id.url_base(&format!("{BASE}/")),
            "http://gd2.mlb.com/components/game/mlb/year_2015/month_04/day_05/gid_2015_04_05_nyamlb_bosmlb_1/"
        );
        let [b, p, i] = id.document_urls(BASE);
        assert!(b.ends_with("_1/boxscore.xml"));
        assert!(p.ends_with("_1/players.xml"));
        assert!(i.ends_with("_1/inning/inning_all.xml"));
    }

    #[test]
    fn identifier_reformats_date() {
        let id = GameIdentifier::new("04/05/2015", "LAD", "SF", "2", TeamRegistry::mlb()).unwrap();
        assert_eq!(id.game_id(), "2015-04-05-LAD-SF-2");
        assert_eq!((id.away_code, id.home_code), ("lan", "sfn"));
    }

    #[test]
    fn unknown_team_is_an_error() {
        let err = GameIdentifier::new("2015-04-05", "NYY", "Boston", "1", TeamRegistry::mlb())
            .unwrap_err();
        assert!(matches!(err, GameError::UnknownTeam(t) if t == "Boston"));
    }

    #[test]
    fn sentinel_boxscore_stops_after_one_fetch() {
        let id = ident();
        let [boxscore, _, _] = id.document_urls(BASE);
        let fetcher = CannedFetcher::default().with(&boxscore, "GameDay - 404 Not Found");

        let outcome = fetch_game(&id, &fetcher, &AnyBoxscore, &config()).unwrap();
        assert!(matches!(outcome, RemoteOutcome::NotFound));
        assert_eq!(fetcher.calls.borrow().as_slice(), &[boxscore]);
    }

    #[test]
    fn absent_boxscore_is_not_found() {
        let fetcher = CannedFetcher::default();
        let outcome = fetch_game(&ident(), &fetcher, &AnyBoxscore, &config()).unwrap();
        assert!(matches!(outcome, RemoteOutcome::NotFound));
        assert_eq!(fetcher.calls.borrow().len(), 1);
    }

    #[test]
    fn fetches_all_three_in_order() {
        let id = ident();
        let [b, p, i] = id.document_urls(BASE);
        let fetcher = CannedFetcher::default()
            .with(&b, "<boxscore/>")
            .with(&p, "<game/>")
            .with(&i, "<game/>");

        match fetch_game(&id, &fetcher, &AnyBoxscore, &config()).unwrap() {
            RemoteOutcome::Found(r) => assert_eq!(r.id, "2015-04-05-NYY-BOS-1"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(fetcher.calls.borrow().as_slice(), &[b, p, i]);
    }

    #[test]
    fn missing_companion_document_is_an_error() {
        let id = ident();
        let [b, p, _] = id.document_urls(BASE);
        let fetcher = CannedFetcher::default()
            .with(&b, "<boxscore/>")
            .with(&p, "<game/>");

        let err = fetch_game(&id, &fetcher, &AnyBoxscore, &config()).unwrap_err();
        assert!(matches!(
            err,
            GameError::MissingRemoteDocument(url) if url.ends_with("inning_all.xml")
        ));
    }

    #[test]
    fn unbuildable_documents() {
        let id = ident();
        let [b, p, i] = id.document_urls(BASE);
        let fetcher = CannedFetcher::default()
            .with(&b, "<game/>")
            .with(&p, "<game/>")
            .with(&i, "<game/>");
        let outcome = fetch_game(&id, &fetcher, &AnyBoxscore, &config()).unwrap();
        assert!(matches!(outcome, RemoteOutcome::Unbuildable));
    }

    #[test]
    fn http_fetcher_maps_status_to_option() {
        let mut server = mockito::Server::new();
        let found = server
            .mock("GET", "/found.xml")
            .with_status(200)
            .with_body("<boxscore/>")
            .create();
        let missing = server
            .mock("GET", "/missing.xml")
            .with_status(404)
            .with_body("GameDay - 404 Not Found")
            .create();

        let fetcher = HttpFetcher::new(&config()).unwrap();
        let body = fetcher
            .fetch_text(&format!("{}/found.xml", server.url()))
            .unwrap();
        assert_eq!(body.as_deref(), Some("<boxscore/>"));
        let body = fetcher
            .fetch_text(&format!("{}/missing.xml", server.url()))
            .unwrap();
        assert_eq!(body, None);

        found.assert();
        missing.assert();
    }
}
