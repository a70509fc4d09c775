use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("vegemap.default.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub places: Option<Places>,
}

impl Config {
    pub fn embedded_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fill in all values that have not been configured.
    pub fn or(self, defaults: Self) -> Self {
        let Self {
            db,
            webserver,
            auth,
            places,
        } = self;
        Self {
            db: merge(db, defaults.db, Db::or),
            webserver: merge(webserver, defaults.webserver, WebServer::or),
            auth: merge(auth, defaults.auth, Auth::or),
            places: merge(places, defaults.places, Places::or),
        }
    }
}

fn merge<T>(value: Option<T>, default: Option<T>, f: impl FnOnce(T, T) -> T) -> Option<T> {
    match (value, default) {
        (Some(value), Some(default)) => Some(f(value, default)),
        (value, default) => value.or(default),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: Option<String>,
    pub connection_pool_size: Option<u32>,
}

impl Db {
    fn or(self, defaults: Self) -> Self {
        Self {
            connection_sqlite: self.connection_sqlite.or(defaults.connection_sqlite),
            connection_pool_size: self.connection_pool_size.or(defaults.connection_pool_size),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: Option<bool>,
    pub address: Option<String>,
    pub port: Option<u16>,
}

impl WebServer {
    fn or(self, defaults: Self) -> Self {
        Self {
            cors: self.cors.or(defaults.cors),
            address: self.address.or(defaults.address),
            port: self.port.or(defaults.port),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    pub jwt_secret: Option<String>,
}

impl Auth {
    fn or(self, defaults: Self) -> Self {
        Self {
            jwt_secret: self.jwt_secret.or(defaults.jwt_secret),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Places {
    pub annotate_distance: Option<bool>,
    pub most_bookmarked_limit: Option<u64>,
}

impl Places {
    fn or(self, defaults: Self) -> Self {
        Self {
            annotate_distance: self.annotate_distance.or(defaults.annotate_distance),
            most_bookmarked_limit: self.most_bookmarked_limit.or(defaults.most_bookmarked_limit),
        }
    }
}
