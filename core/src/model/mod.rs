pub mod activity;
pub mod highlight;
