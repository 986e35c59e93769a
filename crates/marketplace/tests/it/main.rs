mod app;
mod utils;
