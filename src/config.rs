// src/config.rs

use std::{env, path::PathBuf, str::FromStr, sync::Arc};

use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;

use crate::{
    common::error::AppError,
    db::SeedData,
    services::{id_generator::IdPolicy, DashboardService},
};

/// Filtro de data com que a sessão começa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialDateFilter {
    /// Abre em "Fichas do Dia"
    #[default]
    Today,
    None,
}

impl InitialDateFilter {
    pub fn resolve(self) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(Local::now().date_naive()),
            Self::None => None,
        }
    }
}

impl FromStr for InitialDateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "none" => Ok(Self::None),
            other => Err(format!("filtro de data inicial desconhecido: '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub seed_path: Option<PathBuf>,
    pub id_policy: IdPolicy,
    pub initial_date_filter: InitialDateFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:3000".to_string(),
            seed_path: None,
            id_policy: IdPolicy::default(),
            initial_date_filter: InitialDateFilter::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let server_addr = env::var("SERVER_ADDR").unwrap_or(defaults.server_addr);
        let seed_path = env::var("SEED_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let id_policy = parse_var("FICHA_ID_POLICY", defaults.id_policy)?;
        let initial_date_filter = parse_var("INITIAL_DATE_FILTER", defaults.initial_date_filter)?;

        Ok(Self {
            server_addr,
            seed_path,
            id_policy,
            initial_date_filter,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| AppError::InvalidConfig(format!("{name}: {e}"))),
        Err(_) => Ok(default),
    }
}

// O estado compartilhado entre os handlers. O Mutex garante que uma
// intenção termina antes da próxima começar.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<DashboardService>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::from_env()?;
        let seed = SeedData::load(config.seed_path.as_deref()).await?;

        tracing::info!(
            "⚙️ Política de ID: {}, filtro inicial: {:?}",
            config.id_policy,
            config.initial_date_filter
        );

        Ok(Self::with_seed(config, seed))
    }

    pub fn with_seed(config: Config, seed: SeedData) -> Self {
        let dashboard = DashboardService::new(
            seed,
            config.id_policy,
            config.initial_date_filter.resolve(),
        );

        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_initial_filter() {
        assert_eq!("today".parse::<InitialDateFilter>(), Ok(InitialDateFilter::Today));
        assert_eq!("NONE".parse::<InitialDateFilter>(), Ok(InitialDateFilter::None));
        assert!("yesterday".parse::<InitialDateFilter>().is_err());
    }

    #[test]
    fn today_resolves_to_local_date() {
        assert_eq!(InitialDateFilter::Today.resolve(), Some(Local::now().date_naive()));
        assert_eq!(InitialDateFilter::None.resolve(), None);
    }

    #[tokio::test]
    async fn state_starts_with_configured_filter() {
        let config = Config {
            initial_date_filter: InitialDateFilter::None,
            ..Config::default()
        };
        let state = AppState::with_seed(config, SeedData::demo().unwrap());

        let dashboard = state.dashboard.lock().await;
        assert_eq!(dashboard.selected_date(), None);
        assert_eq!(dashboard.visible_fichas().len(), 4);
    }
}
