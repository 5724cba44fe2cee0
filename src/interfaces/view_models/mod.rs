pub mod result_view;

pub use result_view::{Notice, NoticeLevel, ResultView, Tone};
