pub mod media_dto;

pub use media_dto::{
    get_extension_from_content_type, parse_tags, validate_file, MediaResponseDto,
    MediaUploadedDto, UploadMediaDto, MAX_FILE_SIZE,
};
