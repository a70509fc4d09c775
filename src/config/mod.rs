use anyhow::Result;
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};
use thiserror::Error;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "vegemap.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing configuration value '{0}'")]
    Missing(&'static str),
    #[error("Invalid web server address '{0}'")]
    Address(String),
    #[error("The connection pool requires at least one connection")]
    PoolSize,
    #[error("The number of most bookmarked places must be at least 1")]
    MostBookmarkedLimit,
}

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub places: Places,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let raw_config = raw_config.or(raw::Config::embedded_default()?);
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug)]
pub struct WebServer {
    pub enable_cors: bool,
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug)]
pub struct Auth {
    pub jwt_secret: Option<String>,
}

#[derive(Debug)]
pub struct Places {
    pub annotate_distance: bool,
    pub most_bookmarked_limit: u64,
}

impl TryFrom<raw::Config> for Config {
    type Error = Error;
    fn try_from(from: raw::Config) -> Result<Self, Self::Error> {
        let raw::Config {
            db,
            webserver,
            auth,
            places,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        let conn_pool_size = connection_pool_size.ok_or(Error::Missing("connection-pool-size"))?;
        if conn_pool_size == 0 {
            return Err(Error::PoolSize);
        }
        let db = Db {
            conn_sqlite: connection_sqlite.ok_or(Error::Missing("connection-sqlite"))?,
            conn_pool_size,
        };

        let raw::WebServer {
            cors,
            address,
            port,
        } = webserver.unwrap_or_default();
        let address = address.ok_or(Error::Missing("address"))?;
        let parsed_address = address.trim().parse::<IpAddr>();
        let webserver = WebServer {
            enable_cors: cors.unwrap_or(false),
            address: parsed_address.map_err(|_| Error::Address(address))?,
            port: port.ok_or(Error::Missing("port"))?,
        };

        let raw::Auth { jwt_secret } = auth.unwrap_or_default();
        let auth = Auth {
            jwt_secret: jwt_secret.filter(|s| !s.trim().is_empty()),
        };

        let raw::Places {
            annotate_distance,
            most_bookmarked_limit,
        } = places.unwrap_or_default();
        let most_bookmarked_limit =
            most_bookmarked_limit.ok_or(Error::Missing("most-bookmarked-limit"))?;
        if most_bookmarked_limit == 0 {
            return Err(Error::MostBookmarkedLimit);
        }
        let places = Places {
            annotate_distance: annotate_distance.unwrap_or(false),
            most_bookmarked_limit,
        };

        Ok(Self {
            db,
            webserver,
            auth,
            places,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(10, cfg.db.conn_pool_size);
        assert_eq!(8000, cfg.webserver.port);
        assert!(!cfg.places.annotate_distance);
        assert_eq!(10, cfg.places.most_bookmarked_limit);
    }

    #[test]
    fn reject_invalid_config() {
        let defaults = || raw::Config::embedded_default().unwrap();
        let cfg: raw::Config = toml::from_str("[webserver]\naddress = \"localhost:80\"").unwrap();
        assert!(matches!(
            Config::try_from(cfg.or(defaults())),
            Err(Error::Address(_))
        ));
        let cfg: raw::Config = toml::from_str("[db]\nconnection-pool-size = 0").unwrap();
        assert!(matches!(
            Config::try_from(cfg.or(defaults())),
            Err(Error::PoolSize)
        ));
        let cfg: raw::Config = toml::from_str("[places]\nmost-bookmarked-limit = 0").unwrap();
        assert!(matches!(
            Config::try_from(cfg.or(defaults())),
            Err(Error::MostBookmarkedLimit)
        ));
    }

    #[test]
    fn blank_jwt_secret_is_missing() {
        let cfg: raw::Config = toml::from_str("[auth]\njwt-secret = \" \"").unwrap();
        let cfg = Config::try_from(cfg.or(raw::Config::embedded_default().unwrap())).unwrap();
        assert!(cfg.auth.jwt_secret.is_none());
    }
}
