mod error;
mod logger;
mod terminal;
