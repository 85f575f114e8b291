pub mod tweets;

pub use tweets::TweetRepository;
