pub mod giphy;
