pub mod config;
pub mod sheets_client;

pub use config::RegistryConfig;
pub use sheets_client::SheetsRegistryClient;
