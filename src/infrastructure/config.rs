use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            if profile == "default" {
                "sqlite://roombook.db?mode=rwc".to_string()
            } else {
                format!("sqlite://roombook_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
            seed_demo: env::var("SEED_DEMO").is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn profile_picks_its_own_database_file() {
        env::remove_var("DATABASE_URL");
        env::set_var("PROFILE", "staging");
        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite://roombook_staging.db?mode=rwc");
        env::remove_var("PROFILE");
    }

    #[test]
    #[serial]
    fn cors_origins_are_trimmed_and_split() {
        env::set_var(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000, https://rooms.example.org,",
        );
        let config = Config::from_env();
        assert_eq!(
            config.cors_allowed_origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://rooms.example.org".to_string()
            ]
        );
        env::remove_var("CORS_ALLOWED_ORIGINS");
    }
}
