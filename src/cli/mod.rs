pub mod calc;
pub mod chart;
pub mod dashboard;
pub mod history;
pub mod january;
pub mod setup;
pub mod states;
pub mod ui;
