mod export;
mod progress;
