pub mod noembed;
