pub mod prelude;

pub mod post_diff_timestamp;
pub mod post_without_timestamps;
pub mod timestamps;
