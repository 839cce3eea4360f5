//! Desktop shell of the demo.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`pareto_app`]  | [`ParetoApp`]: eframe app wiring controller, panels and dialogs |
//! | [`views`]       | [`ChartViews`]: the panels behind the [`Presenter`](crate::simulation::Presenter) boundary |
//! | [`dialogs`]     | Exit confirmation and error message windows |
//! | [`run`]         | [`run_paretoplot()`] entry point and icon loading |

mod dialogs;
mod pareto_app;
mod run;
mod views;

pub use pareto_app::ParetoApp;
pub use run::run_paretoplot;
pub use views::ChartViews;
