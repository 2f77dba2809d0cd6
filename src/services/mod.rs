pub mod extract;
pub mod relay;
