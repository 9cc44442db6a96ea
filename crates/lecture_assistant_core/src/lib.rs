pub mod domain;
pub mod ports;

pub use domain::{
    ConversationContext, Doubt, LectureAnalysis, LectureRecord, Message, ProcessingStatus, Sender,
    VideoUpload,
};
pub use ports::{LectureAnalysisService, PortError, PortResult, ResponseDelayService};
