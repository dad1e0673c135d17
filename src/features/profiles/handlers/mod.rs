pub mod profile_handler;

pub use profile_handler::{
    __path_get_profile, __path_get_profile_stats, __path_upsert_profile, get_profile,
    get_profile_stats, upsert_profile,
};
