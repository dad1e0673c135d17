pub mod media_handler;

pub use media_handler::{
    __path_delete_media, __path_get_media, __path_list_media, __path_list_media_assessments,
    __path_upload_media, delete_media, get_media, list_media, list_media_assessments, upload_media,
    MediaState,
};
