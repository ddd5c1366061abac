pub use super::post_diff_timestamp::Entity as PostDiffTimestamp;
pub use super::post_without_timestamps::Entity as PostWithoutTimestamps;
