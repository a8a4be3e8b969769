pub mod aleph;
