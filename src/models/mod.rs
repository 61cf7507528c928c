pub mod gif;
pub mod view;

pub use gif::Gif;
pub use view::SearchView;
