pub mod assessment_handler;

pub use assessment_handler::{
    __path_analyze, __path_get_assessment, __path_list_assessments, analyze, get_assessment,
    list_assessments,
};
