pub mod credit_models;
pub mod message_models;
pub mod network_models;
