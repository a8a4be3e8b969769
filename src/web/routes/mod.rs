pub mod credit_routes;
pub mod dashboard_routes;
pub mod instance_routes;
pub mod message_routes;
pub mod network_routes;
pub mod program_routes;
