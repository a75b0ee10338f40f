pub mod article;
pub mod verdict;
