pub mod sr_config;
