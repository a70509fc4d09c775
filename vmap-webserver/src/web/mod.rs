use std::net::IpAddr;

use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Shared secret of the bearer tokens
    pub jwt_secret: Option<String>,
    /// Annotate structured search results with
    /// their distance from the center of the query.
    pub annotate_distance: bool,
    pub most_bookmarked_limit: u64,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

fn jwt_state(cfg: &Cfg) -> jwt::JwtState {
    match cfg.jwt_secret.as_deref().map(str::trim) {
        Some(secret) if !secret.is_empty() => jwt::JwtState::new(secret),
        _ => {
            warn!("No JWT secret configured: bearer tokens of other services will be rejected");
            jwt::JwtState::random()
        }
    }
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    let jwt_state = jwt_state(&cfg);

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: sqlite::Connections, cfg: Cfg, version: &'static str) {
    let rocket_cfg = RocketCfg {
        address: cfg.address,
        port: cfg.port,
        ..RocketCfg::release_default()
    };
    let enable_cors = cfg.enable_cors;
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
