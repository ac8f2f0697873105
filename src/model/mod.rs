pub mod activity;
pub mod flags;
pub mod numeric;
pub mod profile;
pub mod records;
pub mod scores;
