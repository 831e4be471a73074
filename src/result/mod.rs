pub mod pager;

pub use pager::RecordingPager;
