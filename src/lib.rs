pub mod aggregate;
pub mod cache;
pub mod chart;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod division_order;
pub mod fixtures;
pub mod focus;
pub mod formatting;
pub mod labels;
pub mod layout;
pub mod scale;
pub mod season;
pub mod season_query;
pub mod season_view;
pub mod svg;
pub mod tui;
pub mod types;
