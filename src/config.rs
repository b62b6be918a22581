use crate::{
    data::settings::{SyncFrequency, SyncSettings},
    error::LadderResult,
};
use dotenvy::var;

///everything comes from env vars (via dotenvy), with sensible fallbacks - only a
///present-but-malformed value is an error
#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    server_ip: String,
    initial_settings: SyncSettings,
}

impl RuntimeConfiguration {
    pub fn new() -> LadderResult<Self> {
        let mut initial_settings = SyncSettings::default();
        if let Ok(raw) = var("LADDER_SYNC_TIME") {
            initial_settings.sync_time = SyncSettings::parse_sync_time(&raw)?;
        }
        if let Ok(raw) = var("LADDER_SYNC_FREQUENCY") {
            initial_settings.frequency = raw.parse::<SyncFrequency>()?;
        }
        if let Ok(raw) = var("LADDER_INACTIVITY_DAYS") {
            initial_settings.inactivity_days = SyncSettings::parse_inactivity_days(&raw)?;
        }

        Ok(Self {
            server_ip: var("LADDER_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            initial_settings,
        })
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub const fn initial_settings(&self) -> SyncSettings {
        self.initial_settings
    }
}
