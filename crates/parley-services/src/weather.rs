//! Current-weather lookup.

use std::fmt;

use async_trait::async_trait;
use parley_core::config::WeatherConfig;
use parley_core::ParleyError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::http::{build_client, trim_base_url};

/// Current conditions for one place.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Place name as reported by the service.
    pub place: String,
    pub condition: String,
    pub temperature: f64,
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    pub wind_speed: f64,
    pub units: Units,
}

/// Unit system requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Parse a configured unit name; anything unknown is metric.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "imperial" => Units::Imperial,
            "standard" => Units::Standard,
            _ => Units::Metric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    fn speed_symbol(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            _ => "m/s",
        }
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.units.temperature_symbol();
        writeln!(f, "🌤️ Weather in {}:", self.place)?;
        writeln!(f, "• Condition: {}", title_case(&self.condition))?;
        writeln!(
            f,
            "• Temperature: {}{t} (feels like {}{t})",
            self.temperature, self.feels_like
        )?;
        writeln!(f, "• Humidity: {}%", self.humidity)?;
        write!(f, "• Wind Speed: {} {}", self.wind_speed, self.units.speed_symbol())
    }
}

/// Why a weather lookup produced no report. The display text is shown to
/// the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherFailure {
    #[error("Weather API key not configured. Please set {env_var} in your environment variables.")]
    MissingApiKey { env_var: String },
    #[error("Weather API key was rejected. Please check {env_var}.")]
    InvalidApiKey { env_var: String },
    #[error("Sorry, I couldn't find weather information for '{location}'. Please check the spelling.")]
    NotFound { location: String },
    #[error("Sorry, I couldn't fetch weather data for {location}. Please try again later.")]
    Unavailable { location: String },
}

#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherReport, WeatherFailure>;
}

/// OpenWeatherMap current-weather client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    units: Units,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    name: String,
    weather: Vec<Condition>,
    main: Readings,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, ParleyError> {
        Ok(Self {
            client: build_client(config.timeout_secs)?,
            base_url: trim_base_url(&config.base_url),
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
            units: Units::from_name(&config.units),
        })
    }

    /// Whether a credential was resolved from config or the environment.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request(&self, api_key: &str, location: &str) -> Result<WeatherReport, WeatherFailure> {
        let unavailable = || WeatherFailure::Unavailable {
            location: location.to_string(),
        };

        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[("q", location), ("appid", api_key), ("units", self.units.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Weather request failed");
                unavailable()
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                return Err(WeatherFailure::InvalidApiKey {
                    env_var: self.api_key_env.clone(),
                })
            }
            StatusCode::NOT_FOUND => {
                return Err(WeatherFailure::NotFound {
                    location: location.to_string(),
                })
            }
            status if !status.is_success() => {
                warn!(%status, "Weather service returned an error");
                return Err(unavailable());
            }
            _ => {}
        }

        let body: CurrentWeather = response.json().await.map_err(|e| {
            warn!(error = %e, "Weather response could not be decoded");
            unavailable()
        })?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(unavailable)?;

        Ok(WeatherReport {
            place: body.name,
            condition,
            temperature: body.main.temp,
            feels_like: body.main.feels_like,
            humidity: body.main.humidity,
            wind_speed: body.wind.speed,
            units: self.units,
        })
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherReport, WeatherFailure> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(WeatherFailure::MissingApiKey {
                env_var: self.api_key_env.clone(),
            });
        };
        debug!(location, "Fetching current weather");
        let result = self.request(api_key, location).await;
        if let Err(failure) = &result {
            warn!(location, reason = ?failure, "Weather lookup failed");
        }
        result
    }
}

/// Capitalize the first letter of every word.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
