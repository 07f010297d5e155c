mod content_category;
mod types;
