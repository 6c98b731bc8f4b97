//! Fluent builder for constructing a [`Game`].

use fb_catalog::{CarrierDirectory, CityMap, CustomerDirectory};
use fb_core::{CustomerId, Day, GameConfig, GameRng};
use fb_market::{MarketTuning, generate_loads_for_day};

use crate::error::{EngineError, EngineResult};
use crate::game::Game;
use crate::state::{CompanyProfile, GameSettings, SimState};
use crate::tuning::EngineTuning;

/// Fluent builder for [`Game`].
///
/// # Required inputs
///
/// - [`GameConfig`] — player name, starting cash/reputation, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.cities(m)`            | `CityMap::georgia()`             |
/// | `.carriers(d)`          | `CarrierDirectory::standard()`   |
/// | `.directory(d)`         | `CustomerDirectory::standard()`  |
/// | `.market(t)`            | `MarketTuning::default()`        |
/// | `.tuning(t)`            | `EngineTuning::default()`        |
/// | `.starter_customers(v)` | none                             |
/// | `.resume_from(s)`       | fresh state seeded from config   |
///
/// # Example
///
/// ```rust,ignore
/// let mut game = GameBuilder::new(GameConfig { seed: 42, ..Default::default() })
///     .starter_customers(vec![CustomerId(0), CustomerId(1)])
///     .build()?;
/// game.advance_day();
/// ```
pub struct GameBuilder {
    config:    GameConfig,
    cities:    CityMap,
    carriers:  CarrierDirectory,
    directory: CustomerDirectory,
    market:    MarketTuning,
    tuning:    EngineTuning,
    starters:  Vec<CustomerId>,
    resume:    Option<SimState>,
}

impl GameBuilder {
    /// Create a builder with the stock catalogs and canonical tuning.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            cities:    CityMap::georgia(),
            carriers:  CarrierDirectory::standard(),
            directory: CustomerDirectory::standard(),
            market:    MarketTuning::default(),
            tuning:    EngineTuning::default(),
            starters:  Vec::new(),
            resume:    None,
        }
    }

    /// Supply a custom geography table (needs at least two cities).
    pub fn cities(mut self, cities: CityMap) -> Self {
        self.cities = cities;
        self
    }

    /// Supply a custom carrier catalog (must be non-empty).
    pub fn carriers(mut self, carriers: CarrierDirectory) -> Self {
        self.carriers = carriers;
        self
    }

    /// Supply a custom customer catalog.
    pub fn directory(mut self, directory: CustomerDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn market(mut self, market: MarketTuning) -> Self {
        self.market = market;
        self
    }

    pub fn tuning(mut self, tuning: EngineTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Customers put on the books free of charge at game start, so the first
    /// day has freight to broker.
    pub fn starter_customers(mut self, ids: Vec<CustomerId>) -> Self {
        self.starters = ids;
        self
    }

    /// Resume from a previously exported state snapshot instead of seeding a
    /// fresh run.  The catalogs and tuning still come from this builder.
    pub fn resume_from(mut self, state: SimState) -> Self {
        self.resume = Some(state);
        self
    }

    /// Validate inputs, seed day 1's loads, and return a ready [`Game`].
    pub fn build(self) -> EngineResult<Game> {
        if self.cities.len() < 2 {
            return Err(EngineError::Config(
                "city map needs at least two cities".to_string(),
            ));
        }
        if self.carriers.is_empty() {
            return Err(EngineError::Config("carrier directory is empty".to_string()));
        }

        let mut rng = GameRng::new(self.config.seed);

        let state = match self.resume {
            Some(state) => state,
            None => {
                // Starter customers are free copies of directory profiles.
                let mut customers = Vec::with_capacity(self.starters.len());
                for id in &self.starters {
                    let profile = self
                        .directory
                        .get(*id)
                        .ok_or(EngineError::CustomerNotFound(*id))?;
                    customers.push(profile.clone());
                }

                let loads = generate_loads_for_day(
                    &customers,
                    &self.cities,
                    Day::FIRST,
                    &self.market,
                    &mut rng,
                );

                SimState {
                    profile: CompanyProfile {
                        company_name: self.config.company_name.clone(),
                        player_name:  self.config.player_name.clone(),
                        cash:         self.config.starting_cash,
                        reputation:   self.config.starting_reputation.min(100),
                        level:        1,
                    },
                    day: Day::FIRST,
                    customers,
                    loads,
                    ledger: Vec::new(),
                    daily_cash: Vec::new(),
                    autopilot: false,
                    settings: GameSettings {
                        difficulty: self.config.difficulty,
                        max_days:   self.config.max_days,
                    },
                }
            }
        };

        Ok(Game {
            cities:    self.cities,
            carriers:  self.carriers,
            directory: self.directory,
            market:    self.market,
            tuning:    self.tuning,
            state,
            rng,
        })
    }
}
