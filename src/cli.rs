use std::{net::IpAddr, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "vegemap", version, about = "Search and bookmark vegan friendly places")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    /// Address of the web server
    #[arg(long)]
    address: Option<IpAddr>,

    /// Port of the web server
    #[arg(long)]
    port: Option<u16>,
}

impl Args {
    fn override_config(self, cfg: &mut Config) {
        let Self {
            config: _,
            db_url,
            enable_cors,
            address,
            port,
        } = self;
        if let Some(db_url) = db_url {
            cfg.db.conn_sqlite = db_url;
        }
        if enable_cors {
            cfg.webserver.enable_cors = true;
        }
        if let Some(address) = address {
            cfg.webserver.address = address;
        }
        if let Some(port) = port {
            cfg.webserver.port = port;
        }
    }
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    args.override_config(&mut cfg);

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        vmap_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;

    log::info!("Running embedded database migrations");
    vmap_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let web_cfg = vmap_webserver::Cfg {
        address: cfg.webserver.address,
        port: cfg.webserver.port,
        enable_cors: cfg.webserver.enable_cors,
        jwt_secret: cfg.auth.jwt_secret,
        annotate_distance: cfg.places.annotate_distance,
        most_bookmarked_limit: cfg.places.most_bookmarked_limit,
    };
    vmap_webserver::run(connections, web_cfg, env!("CARGO_PKG_VERSION")).await;
    Ok(())
}
