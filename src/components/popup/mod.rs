//! Popups: the shared chrome, its transitions and the built-in list content.

pub mod accessibility;
pub mod list;
pub mod motion;
pub mod skeleton;

pub use accessibility::{Control, PopupKind};
pub use list::ListContent;
pub use motion::{Motion, MotionConfig, MotionEvent, MotionFrame, MotionStage, MotionType};
pub use skeleton::{
    CloseToken, ContentContext, ControlInfo, DataReporter, FooterType, PopupContent,
    PopupHandlers, Skeleton, SkeletonOptions, SkeletonPhase, Title,
};
