use rocket::{local::blocking::Client, Route};

use super::{jwt::JwtState, rocket_instance, sqlite, Cfg, InstanceOptions};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub const JWT_SECRET: &str = "not-so-secret";

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{bearer_token, default_cfg, setup};

    pub use vmap_core::repositories::{BookmarkRepo, PlaceRepo};
}

pub fn default_cfg() -> Cfg {
    Cfg {
        address: [127, 0, 0, 1].into(),
        port: 0,
        enable_cors: false,
        jwt_secret: Some(prelude::JWT_SECRET.into()),
        annotate_distance: false,
        most_bookmarked_limit: 10,
    }
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>, cfg: Cfg) -> (Client, sqlite::Connections) {
    let connections = vmap_db_sqlite::Connections::init(":memory:", 1).unwrap();
    vmap_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version: prelude::DUMMY_VERSION,
    };
    let rocket = rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

/// A valid `Authorization` header value for the given user.
pub fn bearer_token(user_id: &str) -> String {
    let token = JwtState::new(prelude::JWT_SECRET)
        .generate_token(user_id)
        .unwrap();
    format!("Bearer {token}")
}

#[test]
fn random_secret_without_configuration() {
    let cfg = Cfg {
        jwt_secret: Some("  ".into()),
        ..default_cfg()
    };
    let state = super::jwt_state(&cfg);
    let token = JwtState::new(prelude::JWT_SECRET)
        .generate_token("alice")
        .unwrap();
    assert!(state.validate_token_and_get_user_id(&token).is_err());
}

#[test]
fn mount_api_routes() {
    let (client, _) = setup(super::mounts(), default_cfg());
    let res = client.get("/api/server/version").dispatch();
    assert_eq!(res.status(), prelude::Status::Ok);
    assert_eq!(res.into_string().unwrap(), prelude::DUMMY_VERSION);
}
