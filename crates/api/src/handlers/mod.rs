pub mod bids;
pub mod centers;
pub mod forms;
pub mod health;
pub mod maps;
pub mod news;
pub mod services;
pub mod support_tags;
pub mod support_types;
pub mod supports;
pub mod uploads;
