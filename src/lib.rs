pub mod menu;
pub mod model;
pub mod output;
pub mod quiz;
pub mod store;
