mod cli;
mod json;
mod progress;
