pub mod article_source;
pub mod classifier;
pub mod notifier;
