//! Blocking HTTP client for the Ergast API.

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::{
    cache::ResponseCache,
    source::RaceDataSource,
    types::{ConstructorStanding, DriverStanding, Lap, MrData, MrDataEnvelope, Race, StandingsList},
};
use crate::{
    error::Result,
    options::{Round, Season},
};


/// Public Ergast endpoint.
pub const DEFAULT_BASE_URL: &str = "http://ergast.com/api/f1";

/// Rows per page. Ergast caps `limit` at 1000.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

const USER_AGENT: &str = concat!("f1-stats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u32,
    /// `None` waits as long as upstream takes.
    pub timeout: Option<Duration>,
    /// 0 disables response caching.
    pub cache_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
            cache_capacity: 0,
        }
    }
}

pub struct ErgastClient {
    http: Client,
    base_url: String,
    page_size: u32,
    cache: Option<ResponseCache>,
}

impl ErgastClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
            cache: ResponseCache::with_capacity(config.cache_capacity),
        })
    }

    fn page_url(&self, path: &str, limit: u32, offset: u32) -> String {
        format!(
            "{}/{}?limit={}&offset={}",
            self.base_url, path, limit, offset
        )
    }

    /// GET one page and unwrap the `MRData` envelope.
    fn fetch_page(&self, path: &str, limit: u32, offset: u32) -> Result<MrData> {
        let url = self.page_url(path, limit, offset);

        if let Some(body) = self.cache.as_ref().and_then(|c| c.get(&url)) {
            debug!(%url, "Upstream cache hit");
            let envelope: MrDataEnvelope = serde_json::from_str(&body)?;
            return Ok(envelope.mr_data);
        }

        debug!(%url, "Fetching upstream page");
        let body = self
            .http
            .get(&url)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(|e| {
                warn!(%url, error = %e, "Upstream request failed");
                e
            })?;

        let envelope: MrDataEnvelope = serde_json::from_str(&body).map_err(|e| {
            warn!(%url, error = %e, "Upstream returned malformed JSON");
            e
        })?;

        if let Some(cache) = &self.cache {
            cache.put(url, body);
        }

        Ok(envelope.mr_data)
    }

    /// Every page of `path`, following `offset` until `total` rows are covered.
    ///
    /// Servers may cap `limit` below what was asked for, so the offset moves
    /// by the limit each page reports.
    fn fetch_all_pages(&self, path: &str) -> Result<Vec<MrData>> {
        let mut pages = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.fetch_page(path, self.page_size, offset)?;
            let total = page.total;
            let served = if page.limit > 0 { page.limit } else { self.page_size };
            pages.push(page);

            offset += served;
            if offset >= total {
                break;
            }
        }

        Ok(pages)
    }

    fn fetch_races(&self, path: &str) -> Result<Vec<Race>> {
        let mut races = Vec::new();
        for page in self.fetch_all_pages(path)? {
            merge_races(&mut races, page.into_races());
        }
        Ok(races)
    }

    fn fetch_standings(&self, path: &str) -> Result<StandingsList> {
        let mut merged = StandingsList::default();
        for list in self
            .fetch_all_pages(path)?
            .into_iter()
            .flat_map(MrData::into_standings_lists)
        {
            merged.driver_standings.extend(list.driver_standings);
            merged.constructor_standings.extend(list.constructor_standings);
        }
        Ok(merged)
    }
}

/// Append `page` to `races`, joining a race that was split across the page
/// boundary back into one.
pub(crate) fn merge_races(races: &mut Vec<Race>, page: Vec<Race>) {
    for race in page {
        match races.last_mut() {
            Some(last) if last.season == race.season && last.round == race.round => {
                last.results.extend(race.results);
                last.qualifying_results.extend(race.qualifying_results);
                merge_laps(&mut last.laps, race.laps);
            }
            _ => races.push(race),
        }
    }
}

fn merge_laps(laps: &mut Vec<Lap>, page: Vec<Lap>) {
    for lap in page {
        match laps.last_mut() {
            Some(last) if last.number == lap.number => last.timings.extend(lap.timings),
            _ => laps.push(lap),
        }
    }
}

impl RaceDataSource for ErgastClient {
    fn race_results(&self, season: Season) -> Result<Vec<Race>> {
        self.fetch_races(&format!("{}/results.json", season))
    }

    fn qualifying_results(&self, season: Season) -> Result<Vec<Race>> {
        self.fetch_races(&format!("{}/qualifying.json", season))
    }

    fn fastest_lap_results(&self, season: Season) -> Result<Vec<Race>> {
        self.fetch_races(&format!("{}/fastest/1/results.json", season))
    }

    fn race_count(&self, season: Season) -> Result<u32> {
        Ok(self.fetch_page(&format!("{}.json", season), 1, 0)?.total)
    }

    fn driver_standings(&self, season: Season) -> Result<Vec<DriverStanding>> {
        Ok(self
            .fetch_standings(&format!("{}/driverStandings.json", season))?
            .driver_standings)
    }

    fn constructor_standings(&self, season: Season) -> Result<Vec<ConstructorStanding>> {
        Ok(self
            .fetch_standings(&format!("{}/constructorStandings.json", season))?
            .constructor_standings)
    }

    fn driver_standings_after(
        &self,
        season: Season,
        round: Round,
    ) -> Result<Vec<DriverStanding>> {
        Ok(self
            .fetch_standings(&format!("{}/{}/driverStandings.json", season, round))?
            .driver_standings)
    }

    fn constructor_standings_after(
        &self,
        season: Season,
        round: Round,
    ) -> Result<Vec<ConstructorStanding>> {
        Ok(self
            .fetch_standings(&format!("{}/{}/constructorStandings.json", season, round))?
            .constructor_standings)
    }

    fn round_results(&self, season: Season, round: Round) -> Result<Option<Race>> {
        Ok(self
            .fetch_races(&format!("{}/{}/results.json", season, round))?
            .into_iter()
            .next())
    }

    fn laps(&self, season: Season, round: Round) -> Result<Vec<Lap>> {
        Ok(self
            .fetch_races(&format!("{}/{}/laps.json", season, round))?
            .into_iter()
            .next()
            .map(|race| race.laps)
            .unwrap_or_default())
    }
}
