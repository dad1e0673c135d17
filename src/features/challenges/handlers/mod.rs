pub mod admin_challenge_handler;
pub mod challenge_handler;

pub use admin_challenge_handler::{
    __path_create_challenge, __path_delete_challenge, __path_list_all_challenges,
    create_challenge, delete_challenge, list_all_challenges,
};
pub use challenge_handler::{
    __path_get_challenge, __path_join_challenge, __path_list_challenges, __path_my_challenges,
    __path_submit_challenge, get_challenge, join_challenge, list_challenges, my_challenges,
    submit_challenge,
};
