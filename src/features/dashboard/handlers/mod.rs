pub mod dashboard_handler;

pub use dashboard_handler::{
    __path_get_activity, __path_get_insights, __path_get_stats, get_activity, get_insights,
    get_stats,
};
