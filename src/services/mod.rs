pub mod confirm;
pub mod notice_board;

pub use confirm::{Confirmer, FixedAnswer, DELETE_PROMPT};
pub use notice_board::{Notice, NoticeBoard, NoticeKind, NoticeSnapshot};
